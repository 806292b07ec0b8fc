//! Schulbuchkatalog Mathematik RS+ (Westermann, Klett, Cornelsen,
//! Schroedel) mit Kapitel- und Seitenangaben pro Band.

use serde_json::{Value, json};
use std::sync::LazyLock;

pub static SCHULBUECHER_MATHE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "sekundo_5": {
            "id": "sekundo_5",
            "name": "Sekundo 5",
            "verlag": "Westermann",
            "isbn": "978-3-14-124505-3",
            "klassenstufe": "5/6",
            "kapitel": {
                "natuerliche_zahlen": {"name": "Natürliche Zahlen", "seiten": "8-45", "themen": ["Große Zahlen", "Runden", "Grundrechenarten"]},
                "geometrie_grundlagen": {"name": "Geometrische Grundlagen", "seiten": "46-78", "themen": ["Koordinaten", "Geraden", "Winkel"]},
                "groessen": {"name": "Größen", "seiten": "79-115", "themen": ["Längen", "Gewichte", "Zeit"]},
                "brueche": {"name": "Brüche", "seiten": "116-155", "themen": ["Bruchteile", "Kürzen", "Erweitern"]},
                "flaechen": {"name": "Flächen", "seiten": "156-190", "themen": ["Umfang", "Flächeninhalt", "Rechteck"]}
            }
        },
        "sekundo_6": {
            "id": "sekundo_6",
            "name": "Sekundo 6",
            "verlag": "Westermann",
            "isbn": "978-3-14-124506-0",
            "klassenstufe": "5/6",
            "kapitel": {
                "bruchrechnung": {"name": "Bruchrechnung", "seiten": "8-52", "themen": ["Addition", "Subtraktion", "Multiplikation"]},
                "dezimalzahlen": {"name": "Dezimalzahlen", "seiten": "53-95", "themen": ["Umwandlung", "Rechnen", "Runden"]},
                "geometrie": {"name": "Geometrie", "seiten": "96-140", "themen": ["Winkel", "Dreiecke", "Symmetrie"]},
                "koerper": {"name": "Körper", "seiten": "141-175", "themen": ["Würfel", "Quader", "Netze"]},
                "daten": {"name": "Daten und Zufall", "seiten": "176-210", "themen": ["Diagramme", "Mittelwert", "Wahrscheinlichkeit"]}
            }
        },
        "sekundo_7": {
            "id": "sekundo_7",
            "name": "Sekundo 7",
            "verlag": "Westermann",
            "isbn": "978-3-14-124507-7",
            "klassenstufe": "7/8",
            "kapitel": {
                "rationale_zahlen": {"name": "Rationale Zahlen", "seiten": "8-48", "themen": ["Negative Zahlen", "Rechnen", "Koordinatensystem"]},
                "prozent": {"name": "Prozentrechnung", "seiten": "49-92", "themen": ["Grundwert", "Prozentwert", "Prozentsatz"]},
                "terme": {"name": "Terme und Gleichungen", "seiten": "93-138", "themen": ["Terme aufstellen", "Gleichungen lösen"]},
                "geometrie": {"name": "Geometrie", "seiten": "139-185", "themen": ["Kongruenz", "Dreieckskonstruktion"]},
                "proportional": {"name": "Proportionalität", "seiten": "186-220", "themen": ["Dreisatz", "Zuordnungen"]}
            }
        },
        "sekundo_8": {
            "id": "sekundo_8",
            "name": "Sekundo 8",
            "verlag": "Westermann",
            "isbn": "978-3-14-124508-4",
            "klassenstufe": "7/8",
            "kapitel": {
                "lineare_funktionen": {"name": "Lineare Funktionen", "seiten": "8-55", "themen": ["Graphen", "Steigung", "Funktionsgleichung"]},
                "kreis": {"name": "Kreis", "seiten": "56-95", "themen": ["Umfang", "Flächeninhalt", "Kreisausschnitt"]},
                "pythagoras": {"name": "Pythagoras", "seiten": "96-130", "themen": ["Satz des Pythagoras", "Anwendungen"]},
                "zinsrechnung": {"name": "Zinsrechnung", "seiten": "131-165", "themen": ["Zinsen", "Zinseszins"]},
                "statistik": {"name": "Statistik", "seiten": "166-200", "themen": ["Kennwerte", "Boxplot"]}
            }
        },
        "sekundo_9": {
            "id": "sekundo_9",
            "name": "Sekundo 9",
            "verlag": "Westermann",
            "isbn": "978-3-14-124509-1",
            "klassenstufe": "9/10",
            "kapitel": {
                "quadratische_funktionen": {"name": "Quadratische Funktionen", "seiten": "8-58", "themen": ["Parabeln", "Scheitelpunkt", "Nullstellen"]},
                "potenzen": {"name": "Potenzen und Wurzeln", "seiten": "59-98", "themen": ["Potenzgesetze", "Wurzeln"]},
                "aehnlichkeit": {"name": "Ähnlichkeit", "seiten": "99-140", "themen": ["Strahlensätze", "Ähnliche Figuren"]},
                "trigonometrie": {"name": "Trigonometrie", "seiten": "141-185", "themen": ["Sinus", "Kosinus", "Tangens"]},
                "koerper": {"name": "Körperberechnungen", "seiten": "186-225", "themen": ["Prismen", "Zylinder", "Pyramide"]}
            }
        },
        "sekundo_10": {
            "id": "sekundo_10",
            "name": "Sekundo 10",
            "verlag": "Westermann",
            "isbn": "978-3-14-124510-7",
            "klassenstufe": "9/10",
            "kapitel": {
                "gleichungssysteme": {"name": "Gleichungssysteme", "seiten": "8-52", "themen": ["Grafisch", "Rechnerisch", "Textaufgaben"]},
                "exponential": {"name": "Exponentialfunktionen", "seiten": "53-95", "themen": ["Wachstum", "Zerfall"]},
                "kugel_kegel": {"name": "Kugel und Kegel", "seiten": "96-135", "themen": ["Volumen", "Oberfläche"]},
                "wahrscheinlichkeit": {"name": "Wahrscheinlichkeit", "seiten": "136-175", "themen": ["Erwartungswert", "Binomial"]},
                "pruefungsvorbereitung": {"name": "Prüfungsvorbereitung", "seiten": "176-220", "themen": ["Wiederholung", "Übungen"]}
            }
        },
        "schnittpunkt_5": {
            "id": "schnittpunkt_5",
            "name": "Schnittpunkt 5",
            "verlag": "Klett",
            "isbn": "978-3-12-742501-5",
            "klassenstufe": "5/6",
            "kapitel": {
                "natuerliche_zahlen": {"name": "Natürliche Zahlen", "seiten": "10-50", "themen": ["Stellenwerte", "Rechnen", "Runden"]},
                "geometrie": {"name": "Grundlagen der Geometrie", "seiten": "51-90", "themen": ["Geraden", "Winkel", "Koordinaten"]},
                "groessen": {"name": "Größen", "seiten": "91-135", "themen": ["Längen", "Massen", "Zeit", "Geld"]},
                "flaechen": {"name": "Flächen", "seiten": "136-175", "themen": ["Rechteck", "Quadrat", "Umfang"]},
                "brueche": {"name": "Brüche", "seiten": "176-220", "themen": ["Bruchteile", "Vergleichen", "Erweitern"]}
            }
        },
        "schnittpunkt_6": {
            "id": "schnittpunkt_6",
            "name": "Schnittpunkt 6",
            "verlag": "Klett",
            "isbn": "978-3-12-742502-2",
            "klassenstufe": "5/6",
            "kapitel": {
                "bruchrechnung": {"name": "Rechnen mit Brüchen", "seiten": "8-55", "themen": ["Grundrechenarten", "Gemischte Zahlen"]},
                "dezimalzahlen": {"name": "Dezimalzahlen", "seiten": "56-100", "themen": ["Umrechnen", "Rechnen"]},
                "winkel": {"name": "Winkel und Dreiecke", "seiten": "101-145", "themen": ["Winkelarten", "Winkelsumme"]},
                "koerper": {"name": "Körper", "seiten": "146-185", "themen": ["Würfel", "Quader", "Oberfläche"]},
                "daten": {"name": "Daten", "seiten": "186-225", "themen": ["Erheben", "Darstellen", "Auswerten"]}
            }
        },
        "schnittpunkt_7": {
            "id": "schnittpunkt_7",
            "name": "Schnittpunkt 7",
            "verlag": "Klett",
            "isbn": "978-3-12-742503-9",
            "klassenstufe": "7/8",
            "kapitel": {
                "ganze_zahlen": {"name": "Ganze Zahlen", "seiten": "8-48", "themen": ["Negative Zahlen", "Rechnen"]},
                "prozent": {"name": "Prozent und Zinsen", "seiten": "49-98", "themen": ["Prozentrechnung", "Zinsrechnung"]},
                "terme": {"name": "Terme", "seiten": "99-145", "themen": ["Aufstellen", "Umformen", "Gleichungen"]},
                "proportional": {"name": "Zuordnungen", "seiten": "146-190", "themen": ["Proportional", "Antiproportional"]},
                "geometrie": {"name": "Geometrie", "seiten": "191-235", "themen": ["Kongruenz", "Konstruktionen"]}
            }
        },
        "schnittpunkt_8": {
            "id": "schnittpunkt_8",
            "name": "Schnittpunkt 8",
            "verlag": "Klett",
            "isbn": "978-3-12-742504-6",
            "klassenstufe": "7/8",
            "kapitel": {
                "funktionen": {"name": "Lineare Funktionen", "seiten": "8-60", "themen": ["Graphen", "Gleichungen"]},
                "gleichungen": {"name": "Lineare Gleichungen", "seiten": "61-105", "themen": ["Lösen", "Textaufgaben"]},
                "kreis": {"name": "Kreis", "seiten": "106-150", "themen": ["Umfang", "Fläche"]},
                "pythagoras": {"name": "Pythagoras", "seiten": "151-195", "themen": ["Satz", "Anwendungen"]},
                "statistik": {"name": "Statistik", "seiten": "196-240", "themen": ["Kennzahlen", "Boxplot"]}
            }
        },
        "schnittpunkt_9": {
            "id": "schnittpunkt_9",
            "name": "Schnittpunkt 9",
            "verlag": "Klett",
            "isbn": "978-3-12-742505-3",
            "klassenstufe": "9/10",
            "kapitel": {
                "parabeln": {"name": "Quadratische Funktionen", "seiten": "8-62", "themen": ["Parabeln", "Nullstellen"]},
                "potenzen": {"name": "Potenzen", "seiten": "63-105", "themen": ["Gesetze", "Wurzeln"]},
                "aehnlichkeit": {"name": "Ähnlichkeit", "seiten": "106-150", "themen": ["Strahlensätze"]},
                "trigonometrie": {"name": "Trigonometrie", "seiten": "151-200", "themen": ["Sinus", "Kosinus", "Tangens"]},
                "raumgeometrie": {"name": "Raumgeometrie", "seiten": "201-250", "themen": ["Körper", "Berechnungen"]}
            }
        },
        "schnittpunkt_10": {
            "id": "schnittpunkt_10",
            "name": "Schnittpunkt 10",
            "verlag": "Klett",
            "isbn": "978-3-12-742506-0",
            "klassenstufe": "9/10",
            "kapitel": {
                "gleichungssysteme": {"name": "Gleichungssysteme", "seiten": "8-55", "themen": ["Verfahren", "Anwendungen"]},
                "exponential": {"name": "Exponentialfunktionen", "seiten": "56-100", "themen": ["Wachstum", "Zerfall"]},
                "stochastik": {"name": "Stochastik", "seiten": "101-150", "themen": ["Wahrscheinlichkeit", "Erwartungswert"]},
                "koerper": {"name": "Körper", "seiten": "151-195", "themen": ["Kegel", "Kugel"]},
                "wiederholung": {"name": "Prüfungsvorbereitung", "seiten": "196-250", "themen": ["Alle Themen"]}
            }
        },
        "mathe_live_5": {
            "id": "mathe_live_5",
            "name": "Mathe Live 5",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040051-5",
            "klassenstufe": "5/6",
            "kapitel": {
                "zahlen": {"name": "Natürliche Zahlen", "seiten": "12-55", "themen": ["Zahldarstellung", "Rechnen"]},
                "geometrie": {"name": "Geometrie Grundlagen", "seiten": "56-95", "themen": ["Figuren", "Koordinaten"]},
                "groessen": {"name": "Größen", "seiten": "96-140", "themen": ["Messen", "Umrechnen"]},
                "flaechen": {"name": "Flächen und Umfang", "seiten": "141-180", "themen": ["Rechteck", "Quadrat"]},
                "brueche": {"name": "Brüche", "seiten": "181-225", "themen": ["Anteile", "Vergleichen"]}
            }
        },
        "mathe_live_6": {
            "id": "mathe_live_6",
            "name": "Mathe Live 6",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040052-2",
            "klassenstufe": "5/6",
            "kapitel": {
                "bruchrechnung": {"name": "Bruchrechnung", "seiten": "10-58", "themen": ["Rechenoperationen"]},
                "dezimalzahlen": {"name": "Dezimalzahlen", "seiten": "59-105", "themen": ["Rechnen", "Umwandeln"]},
                "geometrie": {"name": "Geometrie", "seiten": "106-150", "themen": ["Winkel", "Dreiecke"]},
                "koerper": {"name": "Körper", "seiten": "151-190", "themen": ["Würfel", "Quader"]},
                "daten": {"name": "Daten und Zufall", "seiten": "191-235", "themen": ["Statistik", "Wahrscheinlichkeit"]}
            }
        },
        "mathe_live_7": {
            "id": "mathe_live_7",
            "name": "Mathe Live 7",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040053-9",
            "klassenstufe": "7/8",
            "kapitel": {
                "rationale_zahlen": {"name": "Rationale Zahlen", "seiten": "8-52", "themen": ["Negative Zahlen", "Rechnen mit rationalen Zahlen"]},
                "prozent": {"name": "Prozentrechnung", "seiten": "53-98", "themen": ["Prozent", "Promille", "Diagramme"]},
                "terme": {"name": "Terme und Gleichungen", "seiten": "99-148", "themen": ["Termumformung", "Lineare Gleichungen"]},
                "zuordnungen": {"name": "Zuordnungen", "seiten": "149-195", "themen": ["Proportional", "Antiproportional", "Dreisatz"]},
                "geometrie": {"name": "Geometrie", "seiten": "196-245", "themen": ["Kongruenz", "Konstruktionen"]}
            }
        },
        "mathe_live_8": {
            "id": "mathe_live_8",
            "name": "Mathe Live 8",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040054-6",
            "klassenstufe": "7/8",
            "kapitel": {
                "lineare_funktionen": {"name": "Lineare Funktionen", "seiten": "10-62", "themen": ["Steigung", "y-Achsenabschnitt", "Geraden"]},
                "gleichungen": {"name": "Lineare Gleichungen", "seiten": "63-108", "themen": ["Äquivalenzumformungen", "Textaufgaben"]},
                "kreis": {"name": "Kreis und Kreisberechnung", "seiten": "109-155", "themen": ["Umfang", "Flächeninhalt", "Kreisausschnitt"]},
                "pythagoras": {"name": "Satz des Pythagoras", "seiten": "156-200", "themen": ["Pythagoras", "Anwendungen"]},
                "statistik": {"name": "Statistik", "seiten": "201-248", "themen": ["Mittelwert", "Median", "Boxplot"]}
            }
        },
        "mathe_live_9": {
            "id": "mathe_live_9",
            "name": "Mathe Live 9",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040055-3",
            "klassenstufe": "9/10",
            "kapitel": {
                "quadratische_funktionen": {"name": "Quadratische Funktionen", "seiten": "8-65", "themen": ["Parabeln", "Scheitelpunkt", "Normalform"]},
                "potenzen": {"name": "Potenzen und Wurzeln", "seiten": "66-112", "themen": ["Potenzgesetze", "Wurzelrechnung"]},
                "aehnlichkeit": {"name": "Ähnlichkeit und Strahlensätze", "seiten": "113-160", "themen": ["Strahlensätze", "Maßstab"]},
                "trigonometrie": {"name": "Trigonometrie", "seiten": "161-215", "themen": ["Sinus", "Kosinus", "Tangens"]},
                "koerper": {"name": "Körperberechnungen", "seiten": "216-265", "themen": ["Prismen", "Zylinder", "Pyramiden"]}
            }
        },
        "mathe_live_10": {
            "id": "mathe_live_10",
            "name": "Mathe Live 10",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-040056-0",
            "klassenstufe": "9/10",
            "kapitel": {
                "gleichungssysteme": {"name": "Lineare Gleichungssysteme", "seiten": "8-58", "themen": ["Grafisches Lösen", "Rechnerische Verfahren"]},
                "quadratische_gleichungen": {"name": "Quadratische Gleichungen", "seiten": "59-108", "themen": ["p-q-Formel", "Satz von Vieta"]},
                "exponential": {"name": "Exponentialfunktionen", "seiten": "109-155", "themen": ["Wachstum", "Zerfall", "Zinseszins"]},
                "kugel_kegel": {"name": "Kugel und Kegel", "seiten": "156-200", "themen": ["Volumen", "Oberfläche"]},
                "stochastik": {"name": "Stochastik", "seiten": "201-250", "themen": ["Wahrscheinlichkeit", "Baumdiagramme", "Erwartungswert"]}
            }
        },
        "neue_wege_5": {
            "id": "neue_wege_5",
            "name": "Mathematik Neue Wege 5",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85655-8",
            "klassenstufe": "5/6",
            "kapitel": {
                "natuerliche_zahlen": {"name": "Natürliche Zahlen", "seiten": "8-48", "themen": ["Stellenwertsystem", "Große Zahlen", "Runden"]},
                "rechnen": {"name": "Rechnen mit natürlichen Zahlen", "seiten": "49-95", "themen": ["Grundrechenarten", "Rechenvorteile"]},
                "geometrie": {"name": "Geometrie entdecken", "seiten": "96-140", "themen": ["Geraden", "Winkel", "Koordinaten"]},
                "groessen": {"name": "Größen im Alltag", "seiten": "141-185", "themen": ["Länge", "Masse", "Zeit", "Geld"]},
                "brueche": {"name": "Brüche verstehen", "seiten": "186-230", "themen": ["Bruchteile", "Kürzen", "Erweitern"]}
            }
        },
        "neue_wege_6": {
            "id": "neue_wege_6",
            "name": "Mathematik Neue Wege 6",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85656-5",
            "klassenstufe": "5/6",
            "kapitel": {
                "bruchrechnung": {"name": "Rechnen mit Brüchen", "seiten": "8-55", "themen": ["Addition", "Subtraktion", "Multiplikation", "Division"]},
                "dezimalzahlen": {"name": "Dezimalzahlen", "seiten": "56-102", "themen": ["Umwandeln", "Rechnen", "Runden"]},
                "geometrie": {"name": "Geometrie", "seiten": "103-148", "themen": ["Winkel", "Dreiecke", "Vierecke"]},
                "koerper": {"name": "Körper untersuchen", "seiten": "149-190", "themen": ["Würfel", "Quader", "Netze", "Oberfläche"]},
                "daten": {"name": "Daten und Zufall", "seiten": "191-235", "themen": ["Diagramme", "Mittelwert", "Wahrscheinlichkeit"]}
            }
        },
        "neue_wege_7": {
            "id": "neue_wege_7",
            "name": "Mathematik Neue Wege 7",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85657-2",
            "klassenstufe": "7/8",
            "kapitel": {
                "rationale_zahlen": {"name": "Rationale Zahlen", "seiten": "8-52", "themen": ["Negative Zahlen", "Rechenoperationen"]},
                "prozent": {"name": "Prozent- und Zinsrechnung", "seiten": "53-102", "themen": ["Grundwert", "Prozentwert", "Zinsen"]},
                "terme": {"name": "Terme und Gleichungen", "seiten": "103-150", "themen": ["Variablen", "Termumformung", "Gleichungen lösen"]},
                "proportional": {"name": "Proportionale Zuordnungen", "seiten": "151-195", "themen": ["Dreisatz", "Graphen"]},
                "geometrie": {"name": "Kongruenz", "seiten": "196-245", "themen": ["Kongruenzsätze", "Dreieckskonstruktion"]}
            }
        },
        "neue_wege_8": {
            "id": "neue_wege_8",
            "name": "Mathematik Neue Wege 8",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85658-9",
            "klassenstufe": "7/8",
            "kapitel": {
                "funktionen": {"name": "Lineare Funktionen", "seiten": "8-58", "themen": ["Funktionsbegriff", "Graphen", "Gleichungen"]},
                "gleichungssysteme": {"name": "Lineare Gleichungssysteme", "seiten": "59-100", "themen": ["Grafisches Lösen", "Einsetzungsverfahren"]},
                "kreis": {"name": "Kreis", "seiten": "101-145", "themen": ["Umfang", "Flächeninhalt"]},
                "pythagoras": {"name": "Pythagoras", "seiten": "146-190", "themen": ["Satz des Pythagoras", "Berechnungen"]},
                "statistik": {"name": "Beschreibende Statistik", "seiten": "191-240", "themen": ["Kennwerte", "Boxplot", "Streuung"]}
            }
        },
        "neue_wege_9": {
            "id": "neue_wege_9",
            "name": "Mathematik Neue Wege 9",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85659-6",
            "klassenstufe": "9/10",
            "kapitel": {
                "parabeln": {"name": "Quadratische Funktionen", "seiten": "8-60", "themen": ["Parabeln", "Scheitelform", "Nullstellen"]},
                "quadratische_gleichungen": {"name": "Quadratische Gleichungen", "seiten": "61-105", "themen": ["p-q-Formel", "Lösungsmenge"]},
                "potenzen": {"name": "Potenzen und Wurzeln", "seiten": "106-150", "themen": ["Potenzgesetze", "Wurzelziehen"]},
                "aehnlichkeit": {"name": "Ähnlichkeit", "seiten": "151-195", "themen": ["Strahlensätze", "Maßstab"]},
                "trigonometrie": {"name": "Trigonometrie", "seiten": "196-250", "themen": ["Sinus", "Kosinus", "Tangens", "Anwendungen"]}
            }
        },
        "neue_wege_10": {
            "id": "neue_wege_10",
            "name": "Mathematik Neue Wege 10",
            "verlag": "Schroedel",
            "isbn": "978-3-507-85660-2",
            "klassenstufe": "9/10",
            "kapitel": {
                "exponential": {"name": "Exponentialfunktionen", "seiten": "8-55", "themen": ["Wachstum", "Zerfall", "Modellierung"]},
                "koerper": {"name": "Körperberechnungen", "seiten": "56-105", "themen": ["Zylinder", "Kegel", "Kugel"]},
                "trigonometrie_vertieft": {"name": "Trigonometrie vertieft", "seiten": "106-150", "themen": ["Sinussatz", "Kosinussatz"]},
                "stochastik": {"name": "Wahrscheinlichkeitsrechnung", "seiten": "151-200", "themen": ["Pfadregeln", "Erwartungswert"]},
                "pruefung": {"name": "Prüfungsvorbereitung", "seiten": "201-255", "themen": ["Gemischte Aufgaben", "Strategien"]}
            }
        },
        "kein_schulbuch": {
            "id": "kein_schulbuch",
            "name": "Ohne Schulbuchbezug",
            "verlag": "",
            "isbn": "",
            "klassenstufe": "alle",
            "kapitel": {}
        }
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_complete() {
        let books = SCHULBUECHER_MATHE.as_object().unwrap();
        // 4 Verlage mit je 6 Bänden plus der Eintrag ohne Schulbuchbezug
        assert_eq!(books.len(), 25);
        assert!(books.contains_key("kein_schulbuch"));
    }

    #[test]
    fn test_book_fields() {
        let book = &SCHULBUECHER_MATHE["sekundo_5"];
        assert_eq!(book["verlag"], "Westermann");
        assert_eq!(book["klassenstufe"], "5/6");
        assert_eq!(book["kapitel"].as_object().unwrap().len(), 5);
    }
}
