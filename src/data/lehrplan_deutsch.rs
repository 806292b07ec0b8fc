//! Lehrplan Deutsch für die Realschule plus (Rheinland-Pfalz), nach
//! Lehrplananalyse 2021/2022 und KMK-Bildungsstandards. Jedes Thema
//! nennt zusätzlich passende Schulbuch-Kapitel.

use serde_json::{Value, json};
use std::sync::LazyLock;

pub static LEHRPLAN_DEUTSCH: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "5/6": {
            "sprechen_zuhoeren": {
                "name": "Sprechen & Zuhören",
                "themen": [
                    {
                        "id": "gespraechsregeln",
                        "name": "Gesprächsregeln & aktives Zuhören",
                        "G": "Gesprächsregeln einhalten (ausreden lassen, Blickkontakt, Lautstärke); aktives Zuhören zeigen (Rückfragen, 'Ich habe verstanden…'); kurze Beiträge in Partner- und Gruppengesprächen",
                        "M": "Gespräche strukturieren (Thema halten, auf Vorredner eingehen, Zusammenfassen); Feedback geben und nehmen; eigene Anliegen erklären und begründen",
                        "E": "Diskussionsregeln in Kleingruppen anwenden; Gesprächsleitung übernehmen (Redezeit, Reihenfolge, Ergebnis sichern); Argumente mit Beispielen/Belegen stützen",
                        "schulbuch_kapitel": ["Miteinander sprechen", "Gesprächsregeln"]
                    },
                    {
                        "id": "erzaehlendes_sprechen",
                        "name": "Erzählendes & berichtendes Sprechen",
                        "G": "Erlebnisse und Beobachtungen zusammenhängend erzählen; Ereignisse in zeitlicher Reihenfolge wiedergeben",
                        "M": "Eigene Anliegen erklären und begründen; einfache Argumente nennen (weil/daher); Schilderungen mit Details ausschmücken",
                        "E": "Adressaten- und situationsangemessen sprechen (formell/informell); Wirkung sprachlicher Mittel erproben; Gegenargumente aufgreifen",
                        "schulbuch_kapitel": ["Erzählen", "Berichten"]
                    },
                    {
                        "id": "vorlesen_szenisch",
                        "name": "Vorlesen & szenisches Lesen",
                        "G": "Vorlesen in angemessenem Tempo und mit Betonung; Wirkung reflektieren (Was kommt an?)",
                        "M": "Rollenspiele und Standbilder zur Texterschließung nutzen; passende sprachliche Mittel wählen",
                        "E": "Adressaten- und situationsangemessen sprechen; Wirkung sprachlicher Mittel bewusst einsetzen",
                        "schulbuch_kapitel": ["Vorlesen üben", "Szenisches Gestalten"]
                    },
                    {
                        "id": "praesentieren",
                        "name": "Präsentieren & Vortragen",
                        "G": "Kurze Präsentation (z.B. Buchvorstellung) mit Stichwortzettel; einfache Visualisierung (Bild/Plakat)",
                        "M": "Präsentieren mit klarer Gliederung (Einleitung–Hauptteil–Schluss) und Medieneinsatz (Bild/Folie)",
                        "E": "Moderations-Tools nutzen (Kartenabfrage, Abstimmung, Protokoll/Ergebnisplakat); Präsentationen reflektieren",
                        "schulbuch_kapitel": ["Referate halten", "Präsentieren"]
                    }
                ]
            },
            "lesen": {
                "name": "Lesen – mit Texten & Medien umgehen",
                "themen": [
                    {
                        "id": "lesefluessigkeit",
                        "name": "Leseflüssigkeit & Wortschatz",
                        "G": "Leseflüssigkeit sichern: sinngruppengerecht lesen, Pausen setzen; Wortschatzarbeit am Text (unbekannte Wörter klären, Wörterbuch nutzen)",
                        "M": "Lesestrategien zunehmend selbstständig anwenden: Markieren, Notizen, Fragen an den Text, Lesetagebuch",
                        "E": "Komplexere Texte erschließen: Zusammenhänge zwischen Textstellen herstellen; Deutungen begründen",
                        "schulbuch_kapitel": ["Lesen üben", "Wortschatz erweitern"]
                    },
                    {
                        "id": "lesestrategien",
                        "name": "Lesestrategien anwenden",
                        "G": "Erste Lesestrategien mit Anleitung: Vorwissen aktivieren, Überschriften/Bilder nutzen, abschnittsweise zusammenfassen",
                        "M": "Lesestrategien selbstständig anwenden; Textsorten unterscheiden (Erzählung, Bericht, Sachtext, Gedicht); typische Merkmale benennen",
                        "E": "Mehrere Quellen zu einem Thema vergleichen; Gemeinsamkeiten/Unterschiede festhalten; Fakten vs. Meinungen erkennen",
                        "schulbuch_kapitel": ["Texte verstehen", "Lesestrategien"]
                    },
                    {
                        "id": "literarische_texte",
                        "name": "Literarische Texte erschließen",
                        "G": "Kernaussagen in literarischen Texten markieren; W-Fragen beantworten",
                        "M": "Erzähltexte erschließen: Figuren, Ort/Zeit, Handlungsschritte, Erzählperspektive (Grundbegriffe)",
                        "E": "Komplexere Texte erschließen; Zusammenhänge zwischen Textstellen herstellen; erste Fragen zur Textabsicht/Wirkung formulieren",
                        "schulbuch_kapitel": ["Erzählungen lesen", "Märchen und Sagen"]
                    },
                    {
                        "id": "sachtexte",
                        "name": "Sachtexte verstehen",
                        "G": "Kernaussagen in Sachtexten markieren; Informationen entnehmen",
                        "M": "Informationen aus Text und einfachen Grafiken/Tabellen entnehmen und wiedergeben",
                        "E": "Mehrere Quellen vergleichen; erste Fragen zur Textabsicht formulieren",
                        "schulbuch_kapitel": ["Sachtexte lesen", "Informationen entnehmen"]
                    },
                    {
                        "id": "medien_texte",
                        "name": "Medien & Texttransformation",
                        "G": "Einfache Medientexte verstehen (Zeitungsartikel, Webseiten)",
                        "M": "Textsorten in verschiedenen Medien erkennen",
                        "E": "Medienwechsel: Text in Bild/Comic/Audio übertragen und die Wirkung reflektieren",
                        "schulbuch_kapitel": ["Medien verstehen", "Texte umwandeln"]
                    }
                ]
            },
            "schreiben": {
                "name": "Schreiben",
                "themen": [
                    {
                        "id": "planen_strukturieren",
                        "name": "Texte planen & strukturieren",
                        "G": "Texte planen (Ideensammlung, Reihenfolge) und absatzweise schreiben; verständlicher roter Faden; Handschrift/Schriftbild leserfreundlich gestalten",
                        "M": "Kohärenz sichern: Konnektoren (zuerst/dann/daher) und Pronomen sinnvoll einsetzen; klare Gliederung",
                        "E": "Überarbeiten als Prozess: Entwurf – Feedback – Revision; persönliche Schreibziele formulieren",
                        "schulbuch_kapitel": ["Texte planen", "Schreibwerkstatt"]
                    },
                    {
                        "id": "erzaehlen",
                        "name": "Erzählen",
                        "G": "Erzählung zu vertrauten Themen verfassen; einfache wörtliche Rede einsetzen; Erlebnisse schildern",
                        "M": "Adressatengerecht schreiben; spannende Erzählungen mit Höhepunkt gestalten",
                        "E": "Kreative Schreibformen (Perspektivwechsel, Fortsetzung, innerer Monolog) unter Bezug auf Vorlagen",
                        "schulbuch_kapitel": ["Erzählen", "Fantasiegeschichten"]
                    },
                    {
                        "id": "berichten_beschreiben",
                        "name": "Berichten & Beschreiben",
                        "G": "Berichte über Erlebnisse/Ereignisse verfassen; Beschreibungen (Person, Gegenstand, Weg) erstellen",
                        "M": "Sachlich und präzise berichten; Vorgangsbeschreibungen verfassen",
                        "E": "Komplexere Beschreibungen mit Fachbegriffen; Berichte für verschiedene Adressaten",
                        "schulbuch_kapitel": ["Berichten", "Beschreiben"]
                    },
                    {
                        "id": "zusammenfassen",
                        "name": "Zusammenfassen",
                        "G": "Kurze Texte in eigenen Worten wiedergeben; Kernaussagen benennen",
                        "M": "Zusammenfassung kurzer Texte; Informationen aus Texten entnehmen und in eigenen Worten wiedergeben",
                        "E": "Längere Texte strukturiert zusammenfassen; Wichtiges von Unwichtigem unterscheiden",
                        "schulbuch_kapitel": ["Zusammenfassen", "Inhaltsangabe"]
                    },
                    {
                        "id": "ueberarbeiten",
                        "name": "Texte überarbeiten",
                        "G": "Überarbeiten mit Checkliste (Inhalt, Reihenfolge, Satzanfänge, Rechtschreibung/Zeichensetzung – Basiskriterien)",
                        "M": "Überarbeiten gezielt: Wortwahl, Satzbau, Verständlichkeit; Peer-Feedback nutzen",
                        "E": "Überarbeiten als Prozess: Entwurf – Feedback – Revision; persönliche Schreibziele formulieren",
                        "schulbuch_kapitel": ["Texte überarbeiten", "Schreibkonferenz"]
                    },
                    {
                        "id": "kreatives_schreiben",
                        "name": "Kreatives Schreiben",
                        "G": "Einfache kreative Texte nach Vorgaben (Bildimpuls, Erzählanfang)",
                        "M": "Kreative Texte zu verschiedenen Anlässen; Schreibspiele",
                        "E": "Kreative Schreibformen (Perspektivwechsel, Fortsetzung, innerer Monolog); Belege/Beispiele einbinden",
                        "schulbuch_kapitel": ["Kreativ schreiben", "Schreibspiele"]
                    },
                    {
                        "id": "erste_argumentation",
                        "name": "Erste Stellungnahmen",
                        "G": "Eigene Meinung formulieren und einfach begründen",
                        "M": "Adressatengerecht schreiben (Brief/E-Mail, Einladung); passende Sprache wählen",
                        "E": "Erste argumentierende Texte (Stellungnahme) mit klarer These und begründeten Argumenten",
                        "schulbuch_kapitel": ["Meinung äußern", "Briefe schreiben"]
                    }
                ]
            },
            "sprache": {
                "name": "Sprache untersuchen",
                "themen": [
                    {
                        "id": "rechtschreibstrategien",
                        "name": "Rechtschreibstrategien",
                        "G": "Grundlegende Rechtschreibstrategien (Silbieren, Ableiten, Merkwörter) anwenden; Wörterbuch nutzen",
                        "M": "Rechtschreibstrategien gezielt einsetzen; Fehler markieren und verbessern",
                        "E": "Eigenständige Fehleranalyse: typische Fehlerquellen erkennen, Übungsstrategien ableiten",
                        "schulbuch_kapitel": ["Richtig schreiben", "Rechtschreibstrategien"]
                    },
                    {
                        "id": "zeichensetzung",
                        "name": "Zeichensetzung",
                        "G": "Satzzeichen in einfachen Sätzen sicher setzen (Punkt, Fragezeichen, Ausrufezeichen)",
                        "M": "Zeichensetzung erweitern (Aufzählungen, wörtliche Rede, erste Nebensätze – Grundmuster)",
                        "E": "Zeichensetzung weitgehend sicher; Kommasetzung bei Aufzählungen und wörtlicher Rede",
                        "schulbuch_kapitel": ["Zeichensetzung", "Kommaregeln"]
                    },
                    {
                        "id": "wortarten",
                        "name": "Wortarten",
                        "G": "Wortarten-Grundlagen (Nomen, Verb, Adjektiv, Artikel, Pronomen) erkennen und für Textarbeit nutzen",
                        "M": "Wortarten sicherer anwenden; Zeitformen (Präsens, Präteritum, Perfekt)",
                        "E": "Wortarten gezielt für Textgestaltung einsetzen; Wirkung beschreiben",
                        "schulbuch_kapitel": ["Wortarten", "Nomen, Verben, Adjektive"]
                    },
                    {
                        "id": "satzglieder",
                        "name": "Satzglieder",
                        "G": "Einfache Satzglieder (Subjekt, Prädikat, Objekt) bestimmen",
                        "M": "Satzglieder/Wortarten sicherer anwenden (Dativ/Akkusativ als Orientierung)",
                        "E": "Satzbau variieren (Wirkung von Satzlänge und Satzstellung)",
                        "schulbuch_kapitel": ["Satzglieder", "Sätze untersuchen"]
                    },
                    {
                        "id": "stilmittel_grundlagen",
                        "name": "Stilmittel (Grundlagen)",
                        "G": "Einfache Stilmittel erkennen (Vergleich, Wiederholung)",
                        "M": "Stilmittel-Grundstock (Vergleich, Wiederholung, wörtliche Rede) erkennen und gezielt einsetzen",
                        "E": "Sprachliche Wirkung beschreiben (höflich/ironisch/sachlich) und eigene Texte entsprechend gestalten",
                        "schulbuch_kapitel": ["Sprache untersuchen", "Stilmittel"]
                    },
                    {
                        "id": "fehleranalyse",
                        "name": "Fehleranalyse & Korrektur",
                        "G": "Fehler markieren und verbessern; persönliche 'Fehlerliste' führen",
                        "M": "Strategien zur Textüberarbeitung: Satzanfänge variieren, treffende Verben/Adjektive wählen",
                        "E": "Grammatik als Werkzeug: Grammatikregeln gezielt zur Textverbesserung nutzen",
                        "schulbuch_kapitel": ["Fehler finden", "Texte verbessern"]
                    }
                ]
            },
            "digital": {
                "name": "Digitale Medien & Methoden",
                "themen": [
                    {
                        "id": "digital_schreiben",
                        "name": "Digital schreiben & formatieren",
                        "G": "Texte digital verfassen und einfach formatieren (Absätze, Überschrift, Schriftgröße); Dateien geordnet speichern",
                        "M": "Arbeiten mit geteilten Dokumenten: gemeinsames Schreiben/Überarbeiten mit Rollen",
                        "E": "Eigene Medienprodukte erstellen (Blogpost, Audio-Minipodcast, Erklärvideo – kurz) inkl. Reflexion",
                        "schulbuch_kapitel": ["Digital schreiben", "Texte am Computer"]
                    },
                    {
                        "id": "recherche",
                        "name": "Recherche & Quellen",
                        "G": "Recherche nach Vorgaben (Suchbegriff, kindgerechte Quellen); Quelle in einfacher Form angeben",
                        "M": "Gezielter recherchieren (Leitfragen, Stichworte, Notizen); Informationen sortieren und in eigenen Worten verwenden",
                        "E": "Quellen grob bewerten (Autorität, Aktualität, Absicht); Werbung/Clickbait erkennen",
                        "schulbuch_kapitel": ["Recherchieren", "Quellen angeben"]
                    },
                    {
                        "id": "praesentationstools",
                        "name": "Präsentationstools",
                        "G": "Einfache Präsentationsformen (Plakat, Folie) mit Bild und kurzen Textbausteinen",
                        "M": "Kurze Präsentationen mit Bild-/Textquellen; Quellenangaben beachten",
                        "E": "Medieneinsatz passend zur Intention; Bildquellen und Urheberrecht beachten",
                        "schulbuch_kapitel": ["Präsentieren", "Plakate gestalten"]
                    },
                    {
                        "id": "lernapps",
                        "name": "Lernapps & digitale Übungen",
                        "G": "Lernapps für Wortarten/Grammatik als Übungsroutine nutzen (kurz, regelmäßig)",
                        "M": "Digitale Tools zur Leseförderung (Antolin/Onilo) sinnvoll einbinden",
                        "E": "Lernwege dokumentieren (Portfolio): Ziele, Fortschritt, Beispiele, Feedback",
                        "schulbuch_kapitel": ["Digital üben", "Lernprogramme"]
                    },
                    {
                        "id": "datenschutz_grundlagen",
                        "name": "Datenschutz (Grundlagen)",
                        "G": "Grundregeln für sicheres Verhalten im Internet kennen",
                        "M": "Quellenangaben vereinheitlichen; Bildquellen beachten",
                        "E": "Datenschutz/Urheberrecht altersangemessen beachten (eigene Bilder, lizenzfreie Bilder, Einverständnis)",
                        "schulbuch_kapitel": ["Sicher im Netz", "Datenschutz"]
                    }
                ]
            }
        },
        "7/8": {
            "sprechen_zuhoeren": {
                "name": "Sprechen & Zuhören",
                "themen": [
                    {
                        "id": "sachbezogen_sprechen",
                        "name": "Sachbezogen sprechen",
                        "G": "Sachbezogen sprechen; in Diskussionen aufeinander eingehen; Gesprächsergebnisse festhalten",
                        "M": "Argumente entwickeln, begründen und ordnen; einfache Debattenformate (Pro/Contra) durchführen",
                        "E": "Moderieren/Leiten von Diskussionen; Rede und Gegenrede strukturiert gestalten",
                        "schulbuch_kapitel": ["Diskutieren", "Argumentieren"]
                    },
                    {
                        "id": "argumentieren_debattieren",
                        "name": "Argumentieren & Debattieren",
                        "G": "Einfache Argumente formulieren; Meinungen begründen",
                        "M": "Gesprächsprotokoll/Ergebnisprotokoll führen; Gesprächsstrategien reflektieren (Nachfragen, Zusammenfassen)",
                        "E": "Rhetorische Mittel im Sprechen gezielt einsetzen (Beispiele, Vergleich, Anrede, Pointierung)",
                        "schulbuch_kapitel": ["Debattieren", "Pro und Contra"]
                    },
                    {
                        "id": "praesentieren_78",
                        "name": "Präsentieren & Medien",
                        "G": "Präsentationen mit Hilfen (Moderationskarten/Plakat) durchführen; verständliche Fachsprache aufbauen",
                        "M": "Präsentationen zunehmend frei; Medieneinsatz passend zur Intention (Diagramm, Bild, Zitat)",
                        "E": "Komplexe Präsentationen mit verschiedenen Medien; Wirkung reflektieren",
                        "schulbuch_kapitel": ["Präsentieren", "Referate"]
                    },
                    {
                        "id": "feedback_gespraechsregeln",
                        "name": "Feedback & Gesprächsregeln",
                        "G": "Gesprächsregeln und Rollen (Moderator, Protokollant) anwenden; Feedback annehmen",
                        "M": "Zuhörstrategien: Notizen, Fragenkatalog, Rückmeldung zur Verständlichkeit",
                        "E": "Konfliktgespräche lösen (Ich-Botschaften, Kompromisse, faire Kommunikation)",
                        "schulbuch_kapitel": ["Feedback geben", "Gespräche führen"]
                    },
                    {
                        "id": "erzaehlen_berichten_muendlich",
                        "name": "Mündliches Erzählen & Berichten",
                        "G": "Erzählendes/berichtendes Sprechen in Schule und Alltag (Unfallbericht, Ereignisschilderung)",
                        "M": "Sachverhalte strukturiert mündlich darstellen",
                        "E": "Reflexion: Wie wirken Sprache, Tonfall, Körpersprache? Anpassung an Zielgruppe/Anlass",
                        "schulbuch_kapitel": ["Berichten", "Erzählen"]
                    }
                ]
            },
            "lesen": {
                "name": "Lesen – mit Texten & Medien umgehen",
                "themen": [
                    {
                        "id": "laengere_texte",
                        "name": "Längere Texte verstehen",
                        "G": "Längere Texte verstehen; Aufbau/Absicht in Grundzügen erkennen (Einleitung–Hauptteil–Schluss)",
                        "M": "Informationen entnehmen, ordnen und wiedergeben; einfache Textbelege finden",
                        "E": "Komplexe Textstrukturen erkennen und analysieren",
                        "schulbuch_kapitel": ["Texte erschließen", "Textaufbau"]
                    },
                    {
                        "id": "literarische_analyse",
                        "name": "Literarische Texte analysieren",
                        "G": "Literarische Texte erschließen: Figurenbeziehungen, zentrale Konflikte, Wendepunkte",
                        "M": "Erzähltechnische Mittel erweitern (Erzählverhalten, Zeitgestaltung, Spannung, Perspektive) – funktional deuten",
                        "E": "Anspruchsvolle Texte deuten; Deutungsansätze begründen und am Text belegen",
                        "schulbuch_kapitel": ["Erzählungen analysieren", "Kurzgeschichten"]
                    },
                    {
                        "id": "pragmatische_texte",
                        "name": "Pragmatische Texte analysieren",
                        "G": "Informationen entnehmen; einfache Analyse (Wer? Was? Warum?)",
                        "M": "Analyse pragmatischer Texte (These, Argumente, Beispiele, Sprache); erste Bewertung der Überzeugungskraft",
                        "E": "Argumentationslücken erkennen; manipulative Strategien benennen (Grundlagen)",
                        "schulbuch_kapitel": ["Sachtexte analysieren", "Argumentationen prüfen"]
                    },
                    {
                        "id": "medienkritik",
                        "name": "Medienkritik",
                        "G": "Medien im Alltag erkennen und einordnen",
                        "M": "Medienkritische Grundfragen: Absicht, Zielgruppe, Darstellungsmittel (Bild, Ton, Layout)",
                        "E": "Genres/Medien vergleichen (Text–Film–Podcast–Online-Artikel): Unterschiede der Darstellung und Wirkung",
                        "schulbuch_kapitel": ["Medien untersuchen", "Medienkritik"]
                    },
                    {
                        "id": "texte_vergleichen",
                        "name": "Texte vergleichen & verknüpfen",
                        "G": "Informationen aus verschiedenen Texten zusammentragen",
                        "M": "Mehrere Texte zu einem Thema verknüpfen; Informationen vergleichen und gewichten",
                        "E": "Intertextualität/Bezüge erkennen (Motiv, Thema) und für Interpretation nutzen; Faktencheck (Grundlagen)",
                        "schulbuch_kapitel": ["Texte vergleichen", "Themen verfolgen"]
                    },
                    {
                        "id": "lesestrategien_78",
                        "name": "Lesestrategien vertiefen",
                        "G": "Lesestrategien festigen (Überfliegen, genau lesen, Zusammenfassen); Lesetagebuch",
                        "M": "Strategien je nach Textsorte und Leseziel auswählen",
                        "E": "Komplexe Lesestrategien für anspruchsvolle Texte anwenden",
                        "schulbuch_kapitel": ["Lesestrategien", "Lesetagebuch"]
                    }
                ]
            },
            "schreiben": {
                "name": "Schreiben",
                "themen": [
                    {
                        "id": "zusammenfassen_78",
                        "name": "Zusammenfassen",
                        "G": "Zusammenfassung, Bericht, Beschreibung sicher anwenden; Texte klar strukturieren",
                        "M": "Inhaltsangaben verfassen; Kernaussagen präzise wiedergeben",
                        "E": "Komplexe Texte strukturiert und prägnant zusammenfassen",
                        "schulbuch_kapitel": ["Inhaltsangabe", "Zusammenfassen"]
                    },
                    {
                        "id": "beschreiben_78",
                        "name": "Beschreiben (vertieft)",
                        "G": "Personen- und Vorgangsbeschreibung mit klarer Struktur",
                        "M": "Präzise und sachliche Beschreibungen; Fachbegriffe verwenden",
                        "E": "Komplexe Beschreibungen für verschiedene Zwecke und Adressaten",
                        "schulbuch_kapitel": ["Beschreiben", "Vorgangsbeschreibung"]
                    },
                    {
                        "id": "lineare_eroerterung",
                        "name": "Lineare Erörterung",
                        "G": "Pro/Contra-Texte mit Stützsätzen; Überarbeiten nach Vorlage/Checkliste",
                        "M": "Erörterung in Grundformen (lineares Argumentieren); klare Argumentation",
                        "E": "Fundierte Erörterung mit Abwägung; klare Position, überzeugender Schluss",
                        "schulbuch_kapitel": ["Erörtern", "Argumentieren"]
                    },
                    {
                        "id": "textanalyse_schreiben",
                        "name": "Textanalyse schreiben",
                        "G": "Einfache Textuntersuchung (Inhalt, Aufbau)",
                        "M": "Einfache Textanalyse (Inhalt, Sprache, Wirkung)",
                        "E": "Analyse/Interpretation mit Belegen (Zitate, Textverweise) und sprachlich präziser Darstellung",
                        "schulbuch_kapitel": ["Texte analysieren", "Interpretation"]
                    },
                    {
                        "id": "materialgestuetzt_vorstufe",
                        "name": "Materialgestütztes Schreiben (Vorstufe)",
                        "G": "Informationen aus Materialien entnehmen und verwenden",
                        "M": "Vorstufe materialgestütztes Schreiben: Material auswählen, Informationen paraphrasieren, Belege einbauen",
                        "E": "Materialgestütztes Argumentieren: mehrere Quellen integrieren, Widersprüche markieren, Quellenfunktion benennen",
                        "schulbuch_kapitel": ["Mit Material schreiben", "Quellen nutzen"]
                    },
                    {
                        "id": "adressatengerecht_78",
                        "name": "Adressatengerechtes Schreiben",
                        "G": "Texte für bestimmte Leser verfassen (Brief, Bericht)",
                        "M": "Adressatengerecht und situationsangemessen schreiben (Beschwerde, Stellungnahme, Bericht)",
                        "E": "Texte für verschiedene Kommunikationssituationen anpassen",
                        "schulbuch_kapitel": ["Briefe schreiben", "Formelle Texte"]
                    },
                    {
                        "id": "kreativ_78",
                        "name": "Kreatives & produktives Schreiben",
                        "G": "Kreative Texte nach Vorgaben verfassen",
                        "M": "Kreative Textformen (Perspektivwechsel, Weiterschreiben)",
                        "E": "Kreative Transformation (Szene schreiben, Perspektivwechsel) + Reflexion über Entscheidungen",
                        "schulbuch_kapitel": ["Kreativ schreiben", "Texte umgestalten"]
                    },
                    {
                        "id": "ueberarbeiten_78",
                        "name": "Überarbeiten (vertieft)",
                        "G": "Textsicherheit: roter Faden, passende Zeitformen, klare Satzgrenzen; Schreibkonferenzen nutzen",
                        "M": "Überarbeiten gezielt: Argumentationslogik, sprachliche Richtigkeit, Stil/Präzision",
                        "E": "Eigenständige Revision: Textqualität anhand von Kriterien beurteilen und verbessern",
                        "schulbuch_kapitel": ["Überarbeiten", "Schreibkonferenz"]
                    }
                ]
            },
            "sprache": {
                "name": "Sprache untersuchen",
                "themen": [
                    {
                        "id": "rechtschreibung_78",
                        "name": "Rechtschreibung festigen",
                        "G": "Rechtschreibung/Zeichensetzung systematisch festigen; Wörterbuch als Standardwerkzeug",
                        "M": "Rechtschreibstrategien gezielt anwenden; typische Fehler vermeiden",
                        "E": "Eigenständige Fehleranalyse und gezielte Korrektur",
                        "schulbuch_kapitel": ["Rechtschreibung", "Rechtschreibtraining"]
                    },
                    {
                        "id": "grammatik_78",
                        "name": "Grammatik vertiefen",
                        "G": "Grammatik-Grundlagen vertiefen (Zeiten, Fälle, Satzarten); einfache Nebensätze erkennen",
                        "M": "Satzgefüge/indirekte Rede; Zeichensetzung bei Nebensätzen und Infinitivgruppen (grundlegend)",
                        "E": "Komplexe Satzstrukturen analysieren und anwenden",
                        "schulbuch_kapitel": ["Grammatik", "Satzgefüge"]
                    },
                    {
                        "id": "wortbildung",
                        "name": "Wortbildung & Wortschatz",
                        "G": "Wortbildung (Komposita, Ableitungen) nutzen, um Wortschatz aufzubauen",
                        "M": "Wortschatz erweitern: Synonyme, treffende Verben, Nominalisierungen bewusst einsetzen/vermeiden",
                        "E": "Wortschatz differenziert und zielgerichtet einsetzen",
                        "schulbuch_kapitel": ["Wortbildung", "Wortschatz"]
                    },
                    {
                        "id": "stilmittel_78",
                        "name": "Stilmittel erkennen & anwenden",
                        "G": "Stilmittel benennen (Grundstock) und Wirkung grob beschreiben",
                        "M": "Register/Stil situationsangemessen: formell/informell, sachlich/emotional; sprachliche Angemessenheit beurteilen",
                        "E": "Stil bewusst variieren (Pointierung, Sachlichkeit, Ironie) – je nach Textsorte/Intention",
                        "schulbuch_kapitel": ["Stilmittel", "Sprachliche Gestaltung"]
                    },
                    {
                        "id": "sprachvarietaeten",
                        "name": "Sprachvarietäten & Sprachwandel",
                        "G": "Unterschiedliche Sprechweisen (Dialekt, Jugendsprache) wahrnehmen",
                        "M": "Fehleranalyse: typische Muster erkennen, gezielte Übungen planen",
                        "E": "Sprachvarietäten und Sprachwandel exemplarisch; Sprachgebrauch in Medien/Sozialen Netzwerken reflektieren",
                        "schulbuch_kapitel": ["Sprachvarietäten", "Sprachwandel"]
                    },
                    {
                        "id": "sprachmanipulation",
                        "name": "Sprache & Manipulation",
                        "G": "Werbung und deren Absichten erkennen",
                        "M": "Sprachliche Beeinflussung in Medien erkennen",
                        "E": "Manipulation durch Sprache erkennen (Framing, Übertreibung, Auslassung) – an Beispielen erläutern",
                        "schulbuch_kapitel": ["Werbesprache", "Manipulation"]
                    }
                ]
            },
            "digital": {
                "name": "Digitale Medien & Methoden",
                "themen": [
                    {
                        "id": "recherche_78",
                        "name": "Recherche & Quellenarbeit",
                        "G": "Recherche mit Leitfragen; Quellen angeben; Informationen in Notizen sammeln und ordnen",
                        "M": "Quellen prüfen (Autor, Datum, Intention); korrekt paraphrasieren und zitieren (Basis)",
                        "E": "Quellenkritik vertieft: Primär-/Sekundärquelle, Bias, Algorithmus/Filterblase – altersangemessen",
                        "schulbuch_kapitel": ["Recherchieren", "Quellen bewerten"]
                    },
                    {
                        "id": "kollaboration",
                        "name": "Kollaboratives Arbeiten",
                        "G": "Textlayout sicher anwenden (Absätze, Überschriften, Zitate); einfache Visualisierung (Diagramm)",
                        "M": "Kollaboratives Schreiben/Überarbeiten in geteilten Dokumenten; Versionen/Kommentare nutzen",
                        "E": "Arbeitsprozesse planen (Zeitplan, Rollen, Checklisten) und dokumentieren",
                        "schulbuch_kapitel": ["Zusammenarbeiten", "Digitale Dokumente"]
                    },
                    {
                        "id": "medienprodukte_78",
                        "name": "Medienprodukte erstellen",
                        "G": "Einfache digitale Produkte erstellen (Plakat, Präsentation)",
                        "M": "Medienprodukte analysieren (Werbung, Influencer-Posts): Bild-Ton-Text-Zusammenspiel",
                        "E": "Eigenständige Medienprojekte (Podcast/Video/Blog) inkl. Planung, Produktion, Feedback und Reflexion",
                        "schulbuch_kapitel": ["Medien produzieren", "Podcast/Video"]
                    },
                    {
                        "id": "urheberrecht",
                        "name": "Urheberrecht & Datenschutz",
                        "G": "Grundregeln zu Bildrechten und Datenschutz kennen",
                        "M": "Urheberrecht beachten; Quellenangaben korrekt",
                        "E": "Urheberrecht/Datenschutz anwenden; Creative-Commons-Grundlagen kennen",
                        "schulbuch_kapitel": ["Urheberrecht", "Datenschutz"]
                    },
                    {
                        "id": "digitale_uebungen_78",
                        "name": "Digitale Übungsformate",
                        "G": "Digitale Übungsformate für Grammatik/Rechtschreibung als Training",
                        "M": "Kooperatives Arbeiten mit digitalen Tools (Padlet/Taskcards)",
                        "E": "Digitale Lernprodukte (Portfolio, Lernjournal) zur Diagnose und Zielsteuerung",
                        "schulbuch_kapitel": ["Digital üben", "Lernportfolio"]
                    }
                ]
            }
        },
        "9/10": {
            "sprechen_zuhoeren": {
                "name": "Sprechen & Zuhören",
                "themen": [
                    {
                        "id": "berufskommunikation",
                        "name": "Kommunikation in Schule & Beruf",
                        "G": "Präsentieren mit Hilfen; Gespräche in Schule/Beruf üben (Telefonat, Beratung, Bewerbungsgespräch – grundlegend)",
                        "M": "Diskutieren/argumentieren in komplexeren Gesprächslagen; Präsentationen mediengestützt",
                        "E": "Debatten/Dispute souverän führen; rhetorische Strategien bewusst einsetzen und reflektieren",
                        "schulbuch_kapitel": ["Bewerbungsgespräch", "Berufliche Kommunikation"]
                    },
                    {
                        "id": "argumentation_910",
                        "name": "Argumentieren & Überzeugen",
                        "G": "Adressaten berücksichtigen; sachlich argumentieren (Basis)",
                        "M": "Rhetorik: Beispiele, Struktur, präzise Begriffe; Einwände fair aufnehmen",
                        "E": "Kommunikation zielgerichtet steuern (Überzeugen, Informieren, Vermitteln) – situationsangemessen",
                        "schulbuch_kapitel": ["Argumentieren", "Überzeugen"]
                    },
                    {
                        "id": "gespraechsleitung",
                        "name": "Gesprächsleitung & Moderation",
                        "G": "Gesprächsergebnisse sichern (Protokoll, To-do-Liste)",
                        "M": "Gesprächsleitung: Redeanteile steuern, Ergebnisse bündeln, Kompromissoptionen formulieren",
                        "E": "Moderation und Feedbackkultur: Kriteriengeleitete Rückmeldung, Selbstreflexion",
                        "schulbuch_kapitel": ["Moderieren", "Gespräche leiten"]
                    },
                    {
                        "id": "praesentieren_910",
                        "name": "Präsentieren (komplex)",
                        "G": "Kurzvortrag mit Hilfen; Zuhörstrategien (Notizen, Rückfragen, Zusammenfassen)",
                        "M": "Mündliche Prüfungssituationen üben (Kurzvortrag + Gespräch)",
                        "E": "Komplexe Sachverhalte adressatengerecht erklären (z.B. Präsentation zu gesellschaftlichem Thema)",
                        "schulbuch_kapitel": ["Präsentieren", "Prüfungsvorbereitung"]
                    }
                ]
            },
            "lesen": {
                "name": "Lesen – mit Texten & Medien umgehen",
                "themen": [
                    {
                        "id": "sachtexte_beruf",
                        "name": "Sachtexte für Alltag & Beruf",
                        "G": "Zentrale Aussagen erfassen; Arbeitsaufträge textnah bearbeiten; Informationen aus Sachtexten nutzen (Alltag/Beruf)",
                        "M": "Informationen bewerten (Relevanz, Plausibilität); Schlussfolgerungen ziehen",
                        "E": "Komplexe Sachtexte erschließen und kritisch einordnen",
                        "schulbuch_kapitel": ["Sachtexte lesen", "Berufsorientierung"]
                    },
                    {
                        "id": "literarische_interpretation",
                        "name": "Literarische Interpretation",
                        "G": "Einfach interpretieren: Figuren/Handlung/Grundthema benennen; Textstellen als Beleg finden",
                        "M": "Literarische Interpretation und Analyse argumentativer Texte; Kontextwissen angemessen nutzen",
                        "E": "Komplexe literarische & pragmatische Texte mehrperspektivisch deuten; Deutungen begründen und abwägen",
                        "schulbuch_kapitel": ["Interpretation", "Literatur analysieren"]
                    },
                    {
                        "id": "argumentative_texte",
                        "name": "Argumentative Texte analysieren",
                        "G": "Argumentative Texte in Grundzügen verstehen (These, Argumente)",
                        "M": "These, Argumente, Belege identifizieren; Überzeugungskraft bewerten",
                        "E": "Argumentationsprüfung: Fehlschlüsse, Manipulation, Missing voices; begründete Bewertung",
                        "schulbuch_kapitel": ["Argumentation analysieren", "Kommentare"]
                    },
                    {
                        "id": "medienanalyse_910",
                        "name": "Medienanalyse (vertieft)",
                        "G": "Informationsquellen im Alltag bewerten (Basis: seriös/unseriös)",
                        "M": "Medienanalyse: Darstellungsmittel (Bild, Ton, Schnitt, Sprache) und Wirkung erklären",
                        "E": "Medienvergleich kritisch (Film/Podcast/Online): Perspektiven, Interessen, Framing, narrative Strategien",
                        "schulbuch_kapitel": ["Medien analysieren", "Filmanalyse"]
                    },
                    {
                        "id": "quellen_verknuepfen",
                        "name": "Quellen verknüpfen & synthetisieren",
                        "G": "Informationen aus verschiedenen Quellen zusammentragen",
                        "M": "Texte/Quellen verknüpfen (Dossier): Gegenüberstellung, Synthese, Stellungnahme vorbereiten",
                        "E": "Eigenständige Lektüren/Rechercheprojekte mit Dokumentation (Lesebiografie/Portfolio)",
                        "schulbuch_kapitel": ["Quellen nutzen", "Rechercheprojekt"]
                    }
                ]
            },
            "schreiben": {
                "name": "Schreiben",
                "themen": [
                    {
                        "id": "bewerbung",
                        "name": "Bewerbung & formelle Texte",
                        "G": "Bewerbung (Lebenslauf/Anschreiben) und formelle Texte (Protokoll, Bericht)",
                        "M": "Bewerbungsunterlagen optimieren; formelle Korrespondenz",
                        "E": "Professionelle Bewerbungen und Geschäftskorrespondenz",
                        "schulbuch_kapitel": ["Bewerbung", "Formelle Texte"]
                    },
                    {
                        "id": "eroerterung_910",
                        "name": "Erörterung (linear & dialektisch)",
                        "G": "Einfache Erörterung; Textüberarbeitung mit Checkliste (Aufbau, Sprache, Normen)",
                        "M": "Erörterung/Kommentar mit Abwägung und klarer Position",
                        "E": "Fundierte dialektische Erörterung; stringente Argumentation mit Belegen",
                        "schulbuch_kapitel": ["Erörterung", "Kommentar"]
                    },
                    {
                        "id": "analyse_interpretation",
                        "name": "Analyse & Interpretation",
                        "G": "Einfache Textuntersuchung mit Textbelegen",
                        "M": "Analyse/Interpretation mit Zitaten; klare Struktur",
                        "E": "Anspruchsvolle Analyse/Interpretation; stringente Argumentation mit sicherem Belegverfahren",
                        "schulbuch_kapitel": ["Textanalyse", "Interpretation schreiben"]
                    },
                    {
                        "id": "materialgestuetzt",
                        "name": "Materialgestütztes Schreiben",
                        "G": "Informationen aus Materialien strukturiert verwenden",
                        "M": "Materialgestütztes Schreiben (MSA-nah): Material auswählen, ordnen, paraphrasieren, belegen",
                        "E": "Materialgestützte Erörterung: Quellenfunktion bewerten, Perspektiven integrieren, Gegenpositionen widerlegen",
                        "schulbuch_kapitel": ["Materialgestützt schreiben", "MSA-Vorbereitung"]
                    },
                    {
                        "id": "sachtexte_schreiben",
                        "name": "Informierende Sachtexte",
                        "G": "Adressatengerechte Sachtexte mit klaren Absätzen",
                        "M": "Adressatengerechte Sachtexte: informieren, erklären, argumentieren (z.B. Leserbrief, Kommentar)",
                        "E": "Komplexe informierende Texte für verschiedene Publikationsformen",
                        "schulbuch_kapitel": ["Sachtexte schreiben", "Leserbrief"]
                    },
                    {
                        "id": "kreativ_910",
                        "name": "Kreatives Schreiben & Transformation",
                        "G": "Kreative Texte nach Vorgaben verfassen",
                        "M": "Kreative Transformation (Umschreiben, Perspektivwechsel)",
                        "E": "Kreative Transformation (Szenisches Schreiben, Umschreiben in anderes Medium) + Reflexion",
                        "schulbuch_kapitel": ["Kreativ schreiben", "Texte transformieren"]
                    },
                    {
                        "id": "ueberarbeiten_910",
                        "name": "Überarbeiten & Schreibprozess",
                        "G": "Schreibstrategien für Prüfungen: planen – schreiben – prüfen (Zeitmanagement)",
                        "M": "Überarbeiten gezielt: Präzision, Kohärenz, Argumentationslogik, sprachliche Richtigkeit",
                        "E": "Schreibstil verfeinern: sprachliche Präzision, Variation, adressatenwirksame Gestaltung",
                        "schulbuch_kapitel": ["Überarbeiten", "Prüfungsvorbereitung"]
                    }
                ]
            },
            "sprache": {
                "name": "Sprache untersuchen",
                "themen": [
                    {
                        "id": "rechtschreibung_910",
                        "name": "Rechtschreibung & Zeichensetzung",
                        "G": "Rechtschreibung/Zeichensetzung weitgehend sicher; Konnektoren für Textzusammenhang einsetzen",
                        "M": "Rechtschreibung und Zeichensetzung sicher anwenden; Fehler vermeiden durch Revisionstechniken",
                        "E": "Rechtschreibung als Grundlage professioneller Texte beherrschen",
                        "schulbuch_kapitel": ["Rechtschreibung", "Zeichensetzung"]
                    },
                    {
                        "id": "grammatik_910",
                        "name": "Grammatik zur Textoptimierung",
                        "G": "Grammatik gezielt zur Korrektur nutzen (Satzgrenzen, Zeiten, indirekte Rede – Grundformen)",
                        "M": "Grammatik als Werkzeug für Textverständlichkeit und Stilverbesserung",
                        "E": "Komplexe grammatische Strukturen sicher anwenden",
                        "schulbuch_kapitel": ["Grammatik anwenden", "Textoptimierung"]
                    },
                    {
                        "id": "stil_wirkung",
                        "name": "Stil & Wirkung",
                        "G": "Verständlichkeit sichern: klare Satzstrukturen, passende Wortwahl, Fachbegriffe korrekt",
                        "M": "Stil/Wirkung: Satzbauvarianten, Nominalstil vs. Verbalstil; sprachliche Angemessenheit begründen",
                        "E": "Stilistische Feinarbeit: Präzision, Bildlichkeit, Argumentationssprache; wirkungsorientiertes Überarbeiten",
                        "schulbuch_kapitel": ["Stil", "Sprachliche Wirkung"]
                    },
                    {
                        "id": "sprachreflexion",
                        "name": "Sprachreflexion",
                        "G": "Unterschiedliche Sprachverwendungen wahrnehmen",
                        "M": "Normen vs. Varietäten unterscheiden; Sprache als Mittel sozialer Teilhabe reflektieren",
                        "E": "Sprachkritik (Medien/Politik/Werbung): Strategien erkennen, bewerten, alternative Formulierungen entwickeln",
                        "schulbuch_kapitel": ["Sprachreflexion", "Sprachkritik"]
                    },
                    {
                        "id": "sprachethik",
                        "name": "Sprachliche Ethik",
                        "G": "Respektvolle Kommunikation in verschiedenen Kontexten",
                        "M": "Sprachreflexion in Analyse/Argumentation einbinden (z.B. Wirkung von Wortwahl)",
                        "E": "Sprachliche Ethik: respektvolle Sprache, diskriminierungssensible Formulierungen reflektieren",
                        "schulbuch_kapitel": ["Sprachethik", "Respektvolle Sprache"]
                    },
                    {
                        "id": "revision",
                        "name": "Eigenständige Revision",
                        "G": "Texte mit Checklisten überprüfen und verbessern",
                        "M": "Fehler vermeiden durch Revisionstechniken (Korrekturroutine, Lautlesen, Checklisten)",
                        "E": "Eigenständige Revision: Textqualität anhand differenzierter Kriterien beurteilen und verbessern",
                        "schulbuch_kapitel": ["Revision", "Textüberarbeitung"]
                    }
                ]
            },
            "digital": {
                "name": "Digitale Medien & Methoden",
                "themen": [
                    {
                        "id": "digitale_bewerbung",
                        "name": "Digitale Bewerbung & Beruf",
                        "G": "Bewerbungsunterlagen digital erstellen; Recherche zu Ausbildung/Beruf und seriöse Quellen erkennen (Basis)",
                        "M": "Online-Bewerbung; digitale Berufsrecherche; professionelle Kommunikation",
                        "E": "Professionelle Online-Präsenz; digitale Portfolios",
                        "schulbuch_kapitel": ["Online-Bewerbung", "Berufsrecherche"]
                    },
                    {
                        "id": "recherche_zitieren",
                        "name": "Recherche & Zitieren",
                        "G": "Zitieren/Quellen angeben nach einfachen Regeln; Plagiate vermeiden",
                        "M": "Recherche und Zitieren systematisch; Quellenbewertung (Autorität, Aktualität, Perspektive)",
                        "E": "Wissenschaftspropädeutisches Arbeiten; korrektes Zitieren und Belegen",
                        "schulbuch_kapitel": ["Zitieren", "Wissenschaftliches Arbeiten"]
                    },
                    {
                        "id": "digitale_werkzeuge",
                        "name": "Digitale Werkzeuge für Textarbeit",
                        "G": "Tools für Planung/Überarbeitung nutzen (Checklisten, Mindmap, Textverarbeitung)",
                        "M": "Digitale Werkzeuge für Textarbeit: Kommentare, Versionierung, kollaboratives Feedback",
                        "E": "Professionelle Nutzung digitaler Schreib- und Publikationswerkzeuge",
                        "schulbuch_kapitel": ["Digitale Werkzeuge", "Textverarbeitung"]
                    },
                    {
                        "id": "ki_tools",
                        "name": "KI-Tools & reflektierter Einsatz",
                        "G": "Reflektierter Umgang mit digitalen Hilfen (z.B. Rechtschreibprüfung) – als Lernhilfe, nicht als Ersatz",
                        "M": "Reflektierter Einsatz von KI-Tools im Lernprozess (Ideen, Formulierungsvarianten, Feedback) mit Transparenz und Prüfung",
                        "E": "Kritische Bewertung von KI-generierten Inhalten; Chancen und Grenzen abwägen",
                        "schulbuch_kapitel": ["KI-Tools", "Digitale Hilfen"]
                    },
                    {
                        "id": "quellenkritik_910",
                        "name": "Quellenkritik & Faktencheck",
                        "G": "Seriöse Quellen erkennen (Basis); Fake News wahrnehmen",
                        "M": "Urheberrecht/Datenschutz anwenden; reflektierter Einsatz digitaler Medien in Präsentationen",
                        "E": "Quellenkritik vertieft (Bias, Algorithmen, Desinformation); Faktencheck-Strategien anwenden",
                        "schulbuch_kapitel": ["Quellenkritik", "Faktencheck"]
                    },
                    {
                        "id": "medienprojekte",
                        "name": "Medienprojekte & Portfolio",
                        "G": "Einfache digitale Produkte für schulische Zwecke erstellen",
                        "M": "Digitale Projekte planen und umsetzen; Dokumentation",
                        "E": "Forschungs-/Medienprojekte selbstständig planen, durchführen und präsentieren; Dokumentation als Portfolio",
                        "schulbuch_kapitel": ["Medienprojekte", "Portfolio"]
                    },
                    {
                        "id": "recht_ethik_ki",
                        "name": "Recht, Ethik & KI",
                        "G": "Grundregeln zu Datenschutz und Urheberrecht kennen",
                        "M": "Urheberrecht/Datenschutz anwenden; verantwortungsvoller Umgang mit Medien",
                        "E": "Recht/Ethik/KI: Chancen/Risiken abwägen und Regeln für verantwortliches Arbeiten entwickeln",
                        "schulbuch_kapitel": ["Medienethik", "Verantwortung"]
                    }
                ]
            }
        }
    })
});

/// Hinweise zur Bewertung der Rechtschreibleistung je Klassenband.
pub static HINWEISE_LEISTUNGSBEWERTUNG: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "5/6": "In Klassenarbeiten, die nicht der Überprüfung der Rechtschreibleistung dienen, wird die Rechtschreibleistung nicht benotet; Rechtschreibung wird v.a. diagnostisch geübt.",
        "7/8": "Rechtschreibleistungen werden (auch) in Leistungssituationen berücksichtigt; bei besonders schwachen Leistungen kann die Note um bis zu eine Notenstufe herabgesetzt werden.",
        "9/10": "Keine ausdrücklichen schriftlichen Leistungsüberprüfungen zum orthografisch korrekten Schreiben; Rechtschreibung bleibt jedoch Bestandteil der Gesamtbeurteilung in Schreibaufgaben."
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stufen_present() {
        for stufe in ["5/6", "7/8", "9/10"] {
            assert!(LEHRPLAN_DEUTSCH.get(stufe).is_some(), "missing {}", stufe);
            assert!(HINWEISE_LEISTUNGSBEWERTUNG.get(stufe).is_some());
        }
    }

    #[test]
    fn test_themen_carry_schulbuch_kapitel() {
        let themen = LEHRPLAN_DEUTSCH["5/6"]["sprechen_zuhoeren"]["themen"]
            .as_array()
            .unwrap();
        assert_eq!(themen.len(), 4);
        for thema in themen {
            assert!(thema["schulbuch_kapitel"].is_array());
        }
    }
}
