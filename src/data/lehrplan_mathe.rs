//! Rahmenlehrplan Mathematik für die Realschule plus (Rheinland-Pfalz).
//! Themen sind nach Doppeljahrgangsstufe und Leitidee gegliedert, jeweils
//! mit Differenzierungsstufen G (grundlegend), M (mittel), E (erweitert).

use serde_json::{Value, json};
use std::sync::LazyLock;

pub static LEHRPLAN_MATHE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "5/6": {
            "zahlen_operationen": {
                "name": "Zahlen und Operationen",
                "themen": [
                    {
                        "id": "natuerliche_zahlen",
                        "name": "Natürliche Zahlen",
                        "G": "Zahlen bis 1 Million lesen, schreiben, ordnen; Grundrechenarten",
                        "M": "Zahlen bis 1 Milliarde; Rechengesetze anwenden; Überschlagsrechnung",
                        "E": "Große Zahlen; Rechenvorteile erkennen und nutzen; Stellenwertsystem"
                    },
                    {
                        "id": "brueche_grundlagen",
                        "name": "Brüche - Grundlagen",
                        "G": "Brüche als Anteile verstehen; einfache Brüche vergleichen",
                        "M": "Brüche erweitern und kürzen; Brüche und Dezimalzahlen umwandeln",
                        "E": "Bruchteile berechnen; gemischte Zahlen; Brüche am Zahlenstrahl"
                    },
                    {
                        "id": "dezimalzahlen",
                        "name": "Dezimalzahlen",
                        "G": "Dezimalzahlen lesen, schreiben, ordnen; Addition und Subtraktion",
                        "M": "Alle Grundrechenarten mit Dezimalzahlen; Runden",
                        "E": "Periodische Dezimalzahlen; Umwandlung in Brüche"
                    },
                    {
                        "id": "negative_zahlen",
                        "name": "Negative Zahlen",
                        "G": "Negative Zahlen im Alltag; Zahlenstrahl; Ordnen",
                        "M": "Addition und Subtraktion ganzer Zahlen",
                        "E": "Multiplikation und Division ganzer Zahlen; Rechenregeln"
                    }
                ]
            },
            "groessen_messen": {
                "name": "Größen und Messen",
                "themen": [
                    {
                        "id": "laengen_gewichte",
                        "name": "Längen und Gewichte",
                        "G": "Einheiten kennen; einfaches Umrechnen; Messen",
                        "M": "Umrechnen zwischen Einheiten; Sachaufgaben lösen",
                        "E": "Komplexe Umrechnungen; Schätzen und Überschlagen"
                    },
                    {
                        "id": "zeit_geld",
                        "name": "Zeit und Geld",
                        "G": "Uhrzeiten; Zeitspannen berechnen; Geldbeträge",
                        "M": "Zeitberechnungen; Preisvergleiche; Rabatte",
                        "E": "Fahrpläne; Zinsrechnung Grundlagen"
                    },
                    {
                        "id": "flaechen_umfang",
                        "name": "Flächen und Umfang",
                        "G": "Umfang und Flächeninhalt von Rechteck und Quadrat",
                        "M": "Zusammengesetzte Flächen; Einheiten umrechnen",
                        "E": "Flächenberechnung bei komplexen Figuren"
                    }
                ]
            },
            "geometrie": {
                "name": "Raum und Form",
                "themen": [
                    {
                        "id": "grundbegriffe_geometrie",
                        "name": "Geometrische Grundbegriffe",
                        "G": "Punkt, Gerade, Strecke; Winkel erkennen",
                        "M": "Parallele und senkrechte Geraden; Winkel messen",
                        "E": "Winkelarten; Konstruktionen mit Zirkel und Lineal"
                    },
                    {
                        "id": "ebene_figuren",
                        "name": "Ebene Figuren",
                        "G": "Dreiecke und Vierecke erkennen und benennen",
                        "M": "Eigenschaften von Dreiecken und Vierecken",
                        "E": "Konstruktion von Dreiecken; Kongruenzsätze"
                    },
                    {
                        "id": "koerper",
                        "name": "Körper",
                        "G": "Würfel und Quader erkennen; Netze",
                        "M": "Oberfläche und Volumen von Würfel und Quader",
                        "E": "Zusammengesetzte Körper; Schrägbilder"
                    }
                ]
            },
            "daten_zufall": {
                "name": "Daten und Zufall",
                "themen": [
                    {
                        "id": "daten_sammeln",
                        "name": "Daten sammeln und darstellen",
                        "G": "Strichlisten; Säulendiagramme lesen und erstellen",
                        "M": "Verschiedene Diagrammtypen; Mittelwert berechnen",
                        "E": "Daten auswerten; Median; kritischer Umgang mit Statistiken"
                    },
                    {
                        "id": "zufall_wahrscheinlichkeit",
                        "name": "Zufall und Wahrscheinlichkeit",
                        "G": "Zufallsexperimente; sicher, unmöglich, möglich",
                        "M": "Wahrscheinlichkeiten angeben; Baumdiagramme",
                        "E": "Wahrscheinlichkeiten berechnen; Laplace-Experimente"
                    }
                ]
            }
        },
        "7/8": {
            "zahlen_operationen": {
                "name": "Zahlen und Operationen",
                "themen": [
                    {
                        "id": "rationale_zahlen",
                        "name": "Rationale Zahlen",
                        "G": "Rechnen mit rationalen Zahlen; Zahlenstrahl",
                        "M": "Alle Rechenoperationen; Rechengesetze",
                        "E": "Komplexe Terme; Variablen einsetzen"
                    },
                    {
                        "id": "prozentrechnung",
                        "name": "Prozentrechnung",
                        "G": "Grundwert, Prozentwert, Prozentsatz verstehen",
                        "M": "Alle drei Größen berechnen; Sachaufgaben",
                        "E": "Prozentuale Zu- und Abnahme; Zinsrechnung"
                    },
                    {
                        "id": "zinsrechnung",
                        "name": "Zinsrechnung",
                        "G": "Jahreszinsen berechnen",
                        "M": "Monatszinsen; Tageszinsen; Kapital und Zinssatz",
                        "E": "Zinseszins; Vergleich von Angeboten"
                    },
                    {
                        "id": "terme_gleichungen",
                        "name": "Terme und Gleichungen",
                        "G": "Einfache Terme aufstellen und vereinfachen",
                        "M": "Gleichungen lösen; Äquivalenzumformungen",
                        "E": "Textaufgaben in Gleichungen übersetzen"
                    }
                ]
            },
            "funktionen": {
                "name": "Funktionaler Zusammenhang",
                "themen": [
                    {
                        "id": "proportionalitaet",
                        "name": "Proportionalität",
                        "G": "Proportionale Zuordnungen erkennen",
                        "M": "Dreisatz; Graphen proportionaler Zuordnungen",
                        "E": "Antiproportionale Zuordnungen; Vergleich"
                    },
                    {
                        "id": "lineare_funktionen",
                        "name": "Lineare Funktionen",
                        "G": "Geraden im Koordinatensystem zeichnen",
                        "M": "Steigung und y-Achsenabschnitt; Funktionsgleichung",
                        "E": "Schnittpunkte berechnen; Parallele Geraden"
                    }
                ]
            },
            "geometrie": {
                "name": "Raum und Form",
                "themen": [
                    {
                        "id": "kongruenz",
                        "name": "Kongruenz und Konstruktion",
                        "G": "Kongruente Figuren erkennen",
                        "M": "Konstruktion von Dreiecken; Kongruenzsätze",
                        "E": "Konstruktionsbeschreibungen; Beweise"
                    },
                    {
                        "id": "kreis",
                        "name": "Kreis",
                        "G": "Kreisbegriffe; Umfang berechnen",
                        "M": "Flächeninhalt des Kreises; Kreisausschnitte",
                        "E": "Kreisbogen; Zusammengesetzte Flächen"
                    },
                    {
                        "id": "pythagoras",
                        "name": "Satz des Pythagoras",
                        "G": "Satz verstehen und in einfachen Fällen anwenden",
                        "M": "Berechnung von Seiten im rechtwinkligen Dreieck",
                        "E": "Anwendung in Sachsituationen; Umkehrung"
                    }
                ]
            },
            "daten_zufall": {
                "name": "Daten und Zufall",
                "themen": [
                    {
                        "id": "statistische_kennwerte",
                        "name": "Statistische Kennwerte",
                        "G": "Mittelwert und Spannweite berechnen",
                        "M": "Median; Quartile; Boxplots lesen",
                        "E": "Boxplots erstellen; Datenvergleiche"
                    },
                    {
                        "id": "mehrstufige_zufallsexperimente",
                        "name": "Mehrstufige Zufallsexperimente",
                        "G": "Baumdiagramme erstellen und lesen",
                        "M": "Pfadregeln anwenden",
                        "E": "Bedingte Wahrscheinlichkeiten"
                    }
                ]
            }
        },
        "9/10": {
            "zahlen_operationen": {
                "name": "Zahlen und Operationen",
                "themen": [
                    {
                        "id": "potenzen_wurzeln",
                        "name": "Potenzen und Wurzeln",
                        "G": "Quadratzahlen; einfache Wurzeln",
                        "M": "Potenzgesetze; Wurzelgesetze",
                        "E": "Potenzen mit rationalen Exponenten"
                    },
                    {
                        "id": "quadratische_gleichungen",
                        "name": "Quadratische Gleichungen",
                        "G": "Lösen durch Probieren; einfache Gleichungen",
                        "M": "p-q-Formel; Lösungsformel anwenden",
                        "E": "Satz von Vieta; Textaufgaben"
                    },
                    {
                        "id": "gleichungssysteme",
                        "name": "Lineare Gleichungssysteme",
                        "G": "Graphisches Lösen",
                        "M": "Einsetzungs- und Gleichsetzungsverfahren",
                        "E": "Additionsverfahren; Textaufgaben"
                    }
                ]
            },
            "funktionen": {
                "name": "Funktionaler Zusammenhang",
                "themen": [
                    {
                        "id": "quadratische_funktionen",
                        "name": "Quadratische Funktionen",
                        "G": "Parabeln zeichnen und erkennen",
                        "M": "Scheitelpunkt; Nullstellen; Normalform",
                        "E": "Scheitelpunktform; Verschiebung und Streckung"
                    },
                    {
                        "id": "exponentialfunktionen",
                        "name": "Exponentialfunktionen",
                        "G": "Wachstum und Zerfall erkennen",
                        "M": "Exponentialfunktionen darstellen",
                        "E": "Modellierung von Wachstumsprozessen"
                    },
                    {
                        "id": "trigonometrie",
                        "name": "Trigonometrie",
                        "G": "Sinus, Kosinus, Tangens im rechtwinkligen Dreieck",
                        "M": "Berechnung von Seiten und Winkeln",
                        "E": "Anwendungen; Sinussatz, Kosinussatz"
                    }
                ]
            },
            "geometrie": {
                "name": "Raum und Form",
                "themen": [
                    {
                        "id": "aehnlichkeit",
                        "name": "Ähnlichkeit",
                        "G": "Ähnliche Figuren erkennen",
                        "M": "Strahlensätze anwenden",
                        "E": "Ähnlichkeitssätze für Dreiecke"
                    },
                    {
                        "id": "koerperberechnungen",
                        "name": "Körperberechnungen",
                        "G": "Volumen und Oberfläche von Prismen und Zylindern",
                        "M": "Pyramide und Kegel",
                        "E": "Kugel; zusammengesetzte Körper"
                    }
                ]
            },
            "daten_zufall": {
                "name": "Daten und Zufall",
                "themen": [
                    {
                        "id": "datenanalyse",
                        "name": "Datenanalyse",
                        "G": "Diagramme lesen und interpretieren",
                        "M": "Statistische Erhebungen planen und auswerten",
                        "E": "Korrelation; kritische Analyse von Statistiken"
                    },
                    {
                        "id": "wahrscheinlichkeitsrechnung",
                        "name": "Wahrscheinlichkeitsrechnung",
                        "G": "Wahrscheinlichkeiten bei einstufigen Experimenten",
                        "M": "Erwartungswert; faire Spiele",
                        "E": "Binomialverteilung Grundlagen"
                    }
                ]
            }
        }
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stufen_present() {
        for stufe in ["5/6", "7/8", "9/10"] {
            assert!(LEHRPLAN_MATHE.get(stufe).is_some(), "missing {}", stufe);
        }
    }

    #[test]
    fn test_themen_carry_three_niveaus() {
        let themen = LEHRPLAN_MATHE["5/6"]["zahlen_operationen"]["themen"]
            .as_array()
            .unwrap();
        assert_eq!(themen.len(), 4);
        for thema in themen {
            for niveau in ["G", "M", "E"] {
                assert!(thema[niveau].is_string());
            }
        }
    }
}
