//! Schulbuchkatalog Deutsch RS+ (Westermann, Schroedel, Schöningh,
//! Klett, Cornelsen) mit Kapitel- und Seitenangaben pro Band.

use serde_json::{Value, json};
use std::sync::LazyLock;

pub static SCHULBUECHER_DEUTSCH: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "praxis_sprache_5": {
            "id": "praxis_sprache_5",
            "name": "Praxis Sprache 5",
            "verlag": "Westermann",
            "isbn": "978-3-14-122645-8",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen", "seiten": "10-45", "themen": ["Erlebnisse erzählen", "Geschichten erfinden", "Bildergeschichten"]},
                "berichten": {"name": "Berichten und Beschreiben", "seiten": "46-75", "themen": ["Unfallbericht", "Vorgangsbeschreibung", "Personenbeschreibung"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "180-220", "themen": ["Groß- und Kleinschreibung", "Dehnung und Schärfung", "s-Laute"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "140-179", "themen": ["Wortarten", "Satzglieder", "Zeitformen"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "76-110", "themen": ["Sachtexte", "Erzähltexte", "Gedichte"]}
            }
        },
        "praxis_sprache_6": {
            "id": "praxis_sprache_6",
            "name": "Praxis Sprache 6",
            "verlag": "Westermann",
            "isbn": "978-3-14-122646-5",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Gestalten", "seiten": "12-50", "themen": ["Fantasiegeschichten", "Nacherzählung", "Perspektivwechsel"]},
                "berichten": {"name": "Informieren und Berichten", "seiten": "51-85", "themen": ["Zeitungsbericht", "Sachlicher Bericht", "Protokoll"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "190-235", "themen": ["Fremdwörter", "Getrennt- und Zusammenschreibung", "Zeichensetzung"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "150-189", "themen": ["Aktiv und Passiv", "Konjunktiv", "Nebensätze"]},
                "lesen": {"name": "Lesen und Medien", "seiten": "86-120", "themen": ["Jugendbücher", "Sachtexte verstehen", "Medienkritik"]}
            }
        },
        "praxis_sprache_7": {
            "id": "praxis_sprache_7",
            "name": "Praxis Sprache 7",
            "verlag": "Westermann",
            "isbn": "978-3-14-122647-2",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren und Erörtern", "seiten": "10-55", "themen": ["Stellungnahme", "Pro-Contra", "Diskussion"]},
                "beschreiben": {"name": "Beschreiben und Erklären", "seiten": "56-90", "themen": ["Inhaltsangabe", "Vorgangsbeschreibung", "Diagramme auswerten"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "200-240", "themen": ["Kommasetzung", "Zitieren", "Fachbegriffe"]},
                "grammatik": {"name": "Sprache und Stil", "seiten": "160-199", "themen": ["Satzverknüpfungen", "Nominalstil", "Konjunktionen"]},
                "lesen": {"name": "Literatur und Medien", "seiten": "91-130", "themen": ["Kurzgeschichten", "Balladen", "Filmanalyse"]}
            }
        },
        "praxis_sprache_8": {
            "id": "praxis_sprache_8",
            "name": "Praxis Sprache 8",
            "verlag": "Westermann",
            "isbn": "978-3-14-122648-9",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren und Überzeugen", "seiten": "12-60", "themen": ["Erörterung", "Leserbrief", "Debatte"]},
                "analysieren": {"name": "Texte analysieren", "seiten": "61-100", "themen": ["Textanalyse", "Sprachliche Mittel", "Interpretation"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "210-245", "themen": ["Fremdwörter", "Fachsprache", "Korrekturlesen"]},
                "grammatik": {"name": "Sprachbetrachtung", "seiten": "170-209", "themen": ["Sprachebenen", "Jugendsprache", "Sprachgeschichte"]},
                "lesen": {"name": "Literatur verstehen", "seiten": "101-140", "themen": ["Novellen", "Drama", "Lyrik analysieren"]}
            }
        },
        "praxis_sprache_9": {
            "id": "praxis_sprache_9",
            "name": "Praxis Sprache 9",
            "verlag": "Westermann",
            "isbn": "978-3-14-122649-6",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Debattieren", "seiten": "10-50", "themen": ["Dialektische Erörterung", "Kommentar", "Debatte"]},
                "analysieren": {"name": "Texte analysieren", "seiten": "51-95", "themen": ["Sachtextanalyse", "Redeanalyse", "Filmkritik"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "200-235", "themen": ["Wissenschaftliches Schreiben", "Zitierregeln", "Quellenarbeit"]},
                "grammatik": {"name": "Sprache reflektieren", "seiten": "160-199", "themen": ["Sprachkritik", "Manipulation durch Sprache", "Fachsprachen"]},
                "lesen": {"name": "Literatur und Gesellschaft", "seiten": "96-140", "themen": ["Romane", "Dramen", "Gegenwartsliteratur"]}
            }
        },
        "praxis_sprache_10": {
            "id": "praxis_sprache_10",
            "name": "Praxis Sprache 10",
            "verlag": "Westermann",
            "isbn": "978-3-14-122650-2",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Bewerten", "seiten": "10-55", "themen": ["Literarische Erörterung", "Essay", "Rezension"]},
                "analysieren": {"name": "Textanalyse vertieft", "seiten": "56-100", "themen": ["Gedichtinterpretation", "Dramenanalyse", "Romananalyse"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "205-240", "themen": ["Prüfungsvorbereitung", "Stilübungen", "Fehleranalyse"]},
                "grammatik": {"name": "Sprache und Kommunikation", "seiten": "165-204", "themen": ["Kommunikationsmodelle", "Rhetorik", "Gesprächsanalyse"]},
                "lesen": {"name": "Literaturepochen", "seiten": "101-145", "themen": ["Aufklärung bis Gegenwart", "Epochenvergleich", "Werkvergleich"]}
            }
        },
        "wortstark_5": {
            "id": "wortstark_5",
            "name": "Wortstark 5",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48205-1",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Erfinden", "seiten": "8-42", "themen": ["Erlebniserzählung", "Märchen", "Abenteuergeschichte"]},
                "berichten": {"name": "Berichten und Beschreiben", "seiten": "43-78", "themen": ["Bericht", "Tierbeschreibung", "Wegbeschreibung"]},
                "rechtschreibung": {"name": "Rechtschreibtraining", "seiten": "175-215", "themen": ["Lautprinzip", "Silben", "Wortbausteine"]},
                "grammatik": {"name": "Sprache erforschen", "seiten": "130-174", "themen": ["Nomen", "Verben", "Adjektive", "Satzarten"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "79-110", "themen": ["Kinderbücher", "Sachtexte", "Gedichte"]}
            }
        },
        "wortstark_6": {
            "id": "wortstark_6",
            "name": "Wortstark 6",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48206-8",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Gestalten", "seiten": "10-48", "themen": ["Nacherzählung", "Reizwortgeschichte", "Perspektive"]},
                "berichten": {"name": "Informieren und Berichten", "seiten": "49-85", "themen": ["Unfallbericht", "Protokoll", "Vorgangsbeschreibung"]},
                "rechtschreibung": {"name": "Rechtschreibtraining", "seiten": "180-225", "themen": ["Dehnung/Schärfung", "s-Laute", "Zeichensetzung"]},
                "grammatik": {"name": "Sprache erforschen", "seiten": "140-179", "themen": ["Tempus", "Kasus", "Satzglieder"]},
                "lesen": {"name": "Lesen und Medien", "seiten": "86-120", "themen": ["Jugendbuch", "Zeitung", "Internet"]}
            }
        },
        "wortstark_7": {
            "id": "wortstark_7",
            "name": "Wortstark 7",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48207-5",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren und Diskutieren", "seiten": "8-50", "themen": ["Begründete Stellungnahme", "Pro-Contra", "Leserbrief"]},
                "beschreiben": {"name": "Beschreiben und Erklären", "seiten": "51-88", "themen": ["Inhaltsangabe", "Personencharakterisierung", "Diagramme"]},
                "rechtschreibung": {"name": "Rechtschreibtraining", "seiten": "190-230", "themen": ["Fremdwörter", "Komma", "Groß/Klein"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "150-189", "themen": ["Aktiv/Passiv", "Konjunktiv", "Gliedsätze"]},
                "lesen": {"name": "Texte verstehen", "seiten": "89-125", "themen": ["Kurzgeschichten", "Balladen", "Sachtexte"]}
            }
        },
        "wortstark_8": {
            "id": "wortstark_8",
            "name": "Wortstark 8",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48208-2",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Überzeugen", "seiten": "10-55", "themen": ["Lineare Erörterung", "Kommentar", "Appell"]},
                "analysieren": {"name": "Texte analysieren", "seiten": "56-98", "themen": ["Textanalyse", "Interpretation", "Sprachliche Mittel"]},
                "rechtschreibung": {"name": "Rechtschreibtraining", "seiten": "195-235", "themen": ["Wissenschaftliche Begriffe", "Zitate", "Korrektur"]},
                "grammatik": {"name": "Sprache reflektieren", "seiten": "155-194", "themen": ["Sprachebenen", "Stilmittel", "Sprachgeschichte"]},
                "lesen": {"name": "Literatur entdecken", "seiten": "99-140", "themen": ["Novelle", "Drama", "Lyrik"]}
            }
        },
        "wortstark_9": {
            "id": "wortstark_9",
            "name": "Wortstark 9",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48209-9",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Debattieren", "seiten": "8-52", "themen": ["Dialektische Erörterung", "Debatte", "Essay"]},
                "analysieren": {"name": "Textanalyse vertieft", "seiten": "53-100", "themen": ["Redeanalyse", "Werbung analysieren", "Filmanalyse"]},
                "rechtschreibung": {"name": "Rechtschreibtraining", "seiten": "200-238", "themen": ["Prüfungsvorbereitung", "Fehlertypen", "Selbstkorrektur"]},
                "grammatik": {"name": "Sprache und Gesellschaft", "seiten": "158-199", "themen": ["Sprachkritik", "Manipulation", "Mehrsprachigkeit"]},
                "lesen": {"name": "Literatur und Zeit", "seiten": "101-145", "themen": ["Gegenwartsliteratur", "Klassiker", "Literaturkritik"]}
            }
        },
        "wortstark_10": {
            "id": "wortstark_10",
            "name": "Wortstark 10",
            "verlag": "Schroedel",
            "isbn": "978-3-507-48210-5",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern auf hohem Niveau", "seiten": "10-55", "themen": ["Literarische Erörterung", "Rezension", "Facharbeit"]},
                "analysieren": {"name": "Interpretation vertieft", "seiten": "56-105", "themen": ["Gedichtvergleich", "Dramenszene", "Romankapitel"]},
                "rechtschreibung": {"name": "Abschlusstraining", "seiten": "205-240", "themen": ["Prüfungsformate", "Zeitmanagement", "Überarbeitung"]},
                "grammatik": {"name": "Sprache und Beruf", "seiten": "160-204", "themen": ["Bewerbung", "Fachsprache", "Präsentation"]},
                "lesen": {"name": "Literaturepochen", "seiten": "106-150", "themen": ["Epochenüberblick", "Werkvergleich", "Literaturgeschichte"]}
            }
        },
        "paul_d_5": {
            "id": "paul_d_5",
            "name": "P.A.U.L. D. 5",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028020-1",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen", "seiten": "12-52", "themen": ["Erlebniserzählung", "Fantasiegeschichte", "Bildergeschichte"]},
                "berichten": {"name": "Berichten und Beschreiben", "seiten": "53-92", "themen": ["Bericht", "Gegenstandsbeschreibung", "Tiersteckbrief"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "200-250", "themen": ["Laute und Buchstaben", "Groß-/Kleinschreibung", "Zeichensetzung"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "150-199", "themen": ["Wortarten", "Satzglieder", "Zeitformen"]},
                "lesen": {"name": "Lesen - Umgang mit Texten", "seiten": "93-130", "themen": ["Erzähltexte", "Sachtexte", "Gedichte"]}
            }
        },
        "paul_d_6": {
            "id": "paul_d_6",
            "name": "P.A.U.L. D. 6",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028021-8",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Gestalten", "seiten": "10-55", "themen": ["Nacherzählung", "Perspektivwechsel", "Innerer Monolog"]},
                "berichten": {"name": "Informieren", "seiten": "56-98", "themen": ["Unfallbericht", "Vorgangsbeschreibung", "Protokoll"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "210-260", "themen": ["Dehnung/Schärfung", "s-Laute", "Fremdwörter"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "160-209", "themen": ["Tempus", "Kasus", "Satzreihe/Satzgefüge"]},
                "lesen": {"name": "Lesen - Umgang mit Texten", "seiten": "99-140", "themen": ["Jugendbuch", "Fabeln", "Balladen"]}
            }
        },
        "paul_d_7": {
            "id": "paul_d_7",
            "name": "P.A.U.L. D. 7",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028022-5",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren und Erörtern", "seiten": "8-55", "themen": ["Begründete Stellungnahme", "Leserbrief", "Diskussion"]},
                "beschreiben": {"name": "Informieren und Beschreiben", "seiten": "56-100", "themen": ["Inhaltsangabe", "Personenbeschreibung", "Diagrammauswertung"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "215-260", "themen": ["Kommasetzung", "Getrennt-/Zusammenschreibung", "Zitieren"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "165-214", "themen": ["Aktiv/Passiv", "Konjunktiv", "Adverbialsätze"]},
                "lesen": {"name": "Lesen - Umgang mit Texten", "seiten": "101-145", "themen": ["Kurzgeschichten", "Balladen", "Sachtextanalyse"]}
            }
        },
        "paul_d_8": {
            "id": "paul_d_8",
            "name": "P.A.U.L. D. 8",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028023-2",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Erörtern", "seiten": "10-60", "themen": ["Lineare Erörterung", "Dialektische Erörterung", "Kommentar"]},
                "analysieren": {"name": "Analysieren und Interpretieren", "seiten": "61-110", "themen": ["Textanalyse", "Interpretation", "Sprachliche Mittel"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "220-265", "themen": ["Fachbegriffe", "Korrekturlesen", "Stilübungen"]},
                "grammatik": {"name": "Sprache reflektieren", "seiten": "170-219", "themen": ["Sprachebenen", "Jugendsprache", "Sprachgeschichte"]},
                "lesen": {"name": "Lesen - Umgang mit Texten", "seiten": "111-155", "themen": ["Novelle", "Drama", "Lyrik"]}
            }
        },
        "paul_d_9": {
            "id": "paul_d_9",
            "name": "P.A.U.L. D. 9",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028024-9",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Debattieren", "seiten": "8-58", "themen": ["Textgebundene Erörterung", "Essay", "Debatte"]},
                "analysieren": {"name": "Analysieren vertieft", "seiten": "59-112", "themen": ["Redeanalyse", "Werbung", "Filmanalyse"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "225-268", "themen": ["Wissenschaftliches Schreiben", "Quellenangaben", "Prüfungsvorbereitung"]},
                "grammatik": {"name": "Sprache und Gesellschaft", "seiten": "175-224", "themen": ["Sprachkritik", "Manipulation", "Kommunikationsanalyse"]},
                "lesen": {"name": "Lesen - Umgang mit Texten", "seiten": "113-160", "themen": ["Gegenwartsliteratur", "Klassiker", "Epochen"]}
            }
        },
        "paul_d_10": {
            "id": "paul_d_10",
            "name": "P.A.U.L. D. 10",
            "verlag": "Schöningh",
            "isbn": "978-3-14-028025-6",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern auf Prüfungsniveau", "seiten": "10-62", "themen": ["Literarische Erörterung", "Materialgestütztes Schreiben", "Rezension"]},
                "analysieren": {"name": "Interpretation vertieft", "seiten": "63-118", "themen": ["Gedichtvergleich", "Dramenanalyse", "Romananalyse"]},
                "rechtschreibung": {"name": "Abschlusstraining", "seiten": "230-270", "themen": ["Prüfungsformate", "Zeitmanagement", "Fehleranalyse"]},
                "grammatik": {"name": "Sprache und Beruf", "seiten": "180-229", "themen": ["Bewerbung", "Fachsprache", "Rhetorik"]},
                "lesen": {"name": "Literaturgeschichte", "seiten": "119-165", "themen": ["Epochenüberblick", "Werkvergleich", "Literaturkritik"]}
            }
        },
        "deutsch_kompetent_5": {
            "id": "deutsch_kompetent_5",
            "name": "Deutsch kompetent 5",
            "verlag": "Klett",
            "isbn": "978-3-12-316001-2",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen", "seiten": "14-55", "themen": ["Erlebniserzählung", "Bildergeschichte", "Fantasieerzählung"]},
                "berichten": {"name": "Berichten und Beschreiben", "seiten": "56-95", "themen": ["Bericht schreiben", "Gegenstandsbeschreibung", "Tierbeschreibung"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "210-260", "themen": ["Laute/Buchstaben", "Groß-/Kleinschreibung", "Zeichensetzung"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "160-209", "themen": ["Wortarten", "Satzglieder", "Zeitformen"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "96-140", "themen": ["Erzähltexte", "Sachtexte", "Gedichte"]}
            }
        },
        "deutsch_kompetent_6": {
            "id": "deutsch_kompetent_6",
            "name": "Deutsch kompetent 6",
            "verlag": "Klett",
            "isbn": "978-3-12-316002-9",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Gestalten", "seiten": "12-58", "themen": ["Nacherzählung", "Reizwortgeschichte", "Innerer Monolog"]},
                "berichten": {"name": "Informieren", "seiten": "59-102", "themen": ["Unfallbericht", "Vorgangsbeschreibung", "Protokoll"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "220-270", "themen": ["Dehnung/Schärfung", "s-Laute", "Fremdwörter"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "170-219", "themen": ["Tempus vertieft", "Kasus", "Satzgefüge"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "103-148", "themen": ["Jugendbuch", "Fabeln", "Balladen"]}
            }
        },
        "deutsch_kompetent_7": {
            "id": "deutsch_kompetent_7",
            "name": "Deutsch kompetent 7",
            "verlag": "Klett",
            "isbn": "978-3-12-316003-6",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren", "seiten": "10-58", "themen": ["Begründete Stellungnahme", "Leserbrief", "Pro-Contra-Erörterung"]},
                "beschreiben": {"name": "Informieren und Beschreiben", "seiten": "59-105", "themen": ["Inhaltsangabe", "Charakterisierung", "Diagramme auswerten"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "225-275", "themen": ["Kommasetzung", "Getrennt-/Zusammenschreibung", "Zitieren"]},
                "grammatik": {"name": "Sprache untersuchen", "seiten": "175-224", "themen": ["Aktiv/Passiv", "Konjunktiv", "Nebensätze"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "106-152", "themen": ["Kurzgeschichten", "Balladen", "Sachtexte"]}
            }
        },
        "deutsch_kompetent_8": {
            "id": "deutsch_kompetent_8",
            "name": "Deutsch kompetent 8",
            "verlag": "Klett",
            "isbn": "978-3-12-316004-3",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Erörtern", "seiten": "8-62", "themen": ["Lineare Erörterung", "Dialektische Erörterung", "Kommentar"]},
                "analysieren": {"name": "Analysieren und Interpretieren", "seiten": "63-115", "themen": ["Textanalyse", "Interpretation", "Sprachliche Mittel"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "230-278", "themen": ["Fachbegriffe", "Stilübungen", "Korrekturlesen"]},
                "grammatik": {"name": "Sprache reflektieren", "seiten": "180-229", "themen": ["Sprachebenen", "Jugendsprache", "Sprachgeschichte"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "116-162", "themen": ["Novelle", "Drama", "Lyrik"]}
            }
        },
        "deutsch_kompetent_9": {
            "id": "deutsch_kompetent_9",
            "name": "Deutsch kompetent 9",
            "verlag": "Klett",
            "isbn": "978-3-12-316005-0",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Debattieren", "seiten": "10-62", "themen": ["Textgebundene Erörterung", "Essay", "Debatte"]},
                "analysieren": {"name": "Analysieren vertieft", "seiten": "63-118", "themen": ["Redeanalyse", "Werbung analysieren", "Filmkritik"]},
                "rechtschreibung": {"name": "Richtig schreiben", "seiten": "235-280", "themen": ["Wissenschaftliches Schreiben", "Quellenarbeit", "Prüfungsvorbereitung"]},
                "grammatik": {"name": "Sprache und Gesellschaft", "seiten": "185-234", "themen": ["Sprachkritik", "Manipulation", "Kommunikation"]},
                "lesen": {"name": "Lesen und Verstehen", "seiten": "119-168", "themen": ["Gegenwartsliteratur", "Klassiker", "Epochen"]}
            }
        },
        "deutsch_kompetent_10": {
            "id": "deutsch_kompetent_10",
            "name": "Deutsch kompetent 10",
            "verlag": "Klett",
            "isbn": "978-3-12-316006-7",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern Prüfungsniveau", "seiten": "8-65", "themen": ["Literarische Erörterung", "Materialgestütztes Schreiben", "Rezension"]},
                "analysieren": {"name": "Interpretation vertieft", "seiten": "66-125", "themen": ["Gedichtvergleich", "Dramenanalyse", "Romananalyse"]},
                "rechtschreibung": {"name": "Abschlusstraining", "seiten": "240-285", "themen": ["Prüfungsformate", "Zeitmanagement", "Fehleranalyse"]},
                "grammatik": {"name": "Sprache und Beruf", "seiten": "190-239", "themen": ["Bewerbung", "Fachsprache", "Rhetorik"]},
                "lesen": {"name": "Literaturgeschichte", "seiten": "126-175", "themen": ["Epochenüberblick", "Werkvergleich", "Literaturkritik"]}
            }
        },
        "deutschbuch_5": {
            "id": "deutschbuch_5",
            "name": "Deutschbuch 5",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062413-2",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen", "seiten": "14-48", "themen": ["Erlebniserzählung", "Fantasiegeschichte", "Bildergeschichte"]},
                "berichten": {"name": "Berichten", "seiten": "49-82", "themen": ["Bericht schreiben", "Beschreiben", "Informieren"]},
                "rechtschreibung": {"name": "Rechtschreibung", "seiten": "200-245", "themen": ["Grundregeln", "Dehnung/Schärfung", "Groß/Klein"]},
                "grammatik": {"name": "Grammatik", "seiten": "150-199", "themen": ["Wortarten", "Satzglieder", "Zeiten"]},
                "lesen": {"name": "Lesen", "seiten": "83-120", "themen": ["Sachtexte", "Erzählungen", "Gedichte"]}
            }
        },
        "deutschbuch_6": {
            "id": "deutschbuch_6",
            "name": "Deutschbuch 6",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062414-9",
            "klassenstufe": "5/6",
            "kapitel": {
                "erzaehlen": {"name": "Erzählen und Gestalten", "seiten": "12-52", "themen": ["Nacherzählung", "Perspektivwechsel", "Innerer Monolog"]},
                "berichten": {"name": "Informieren und Berichten", "seiten": "53-90", "themen": ["Unfallbericht", "Vorgangsbeschreibung", "Protokoll"]},
                "rechtschreibung": {"name": "Rechtschreibung", "seiten": "210-258", "themen": ["Dehnung/Schärfung", "s-Laute", "Fremdwörter"]},
                "grammatik": {"name": "Grammatik", "seiten": "160-209", "themen": ["Tempus", "Kasus", "Satzgefüge"]},
                "lesen": {"name": "Lesen", "seiten": "91-135", "themen": ["Jugendbuch", "Fabeln", "Balladen"]}
            }
        },
        "deutschbuch_7": {
            "id": "deutschbuch_7",
            "name": "Deutschbuch 7",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062415-6",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Argumentieren", "seiten": "10-55", "themen": ["Begründete Stellungnahme", "Leserbrief", "Diskussion"]},
                "beschreiben": {"name": "Informieren", "seiten": "56-98", "themen": ["Inhaltsangabe", "Charakterisierung", "Diagramme"]},
                "rechtschreibung": {"name": "Rechtschreibung", "seiten": "220-265", "themen": ["Kommasetzung", "Getrennt-/Zusammenschreibung", "Zitieren"]},
                "grammatik": {"name": "Grammatik", "seiten": "170-219", "themen": ["Aktiv/Passiv", "Konjunktiv", "Nebensätze"]},
                "lesen": {"name": "Lesen", "seiten": "99-145", "themen": ["Kurzgeschichten", "Balladen", "Sachtexte"]}
            }
        },
        "deutschbuch_8": {
            "id": "deutschbuch_8",
            "name": "Deutschbuch 8",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062416-3",
            "klassenstufe": "7/8",
            "kapitel": {
                "argumentieren": {"name": "Erörtern", "seiten": "8-58", "themen": ["Lineare Erörterung", "Dialektische Erörterung", "Kommentar"]},
                "analysieren": {"name": "Analysieren", "seiten": "59-108", "themen": ["Textanalyse", "Interpretation", "Sprachliche Mittel"]},
                "rechtschreibung": {"name": "Rechtschreibung", "seiten": "225-270", "themen": ["Fachbegriffe", "Stilübungen", "Korrektur"]},
                "grammatik": {"name": "Grammatik", "seiten": "175-224", "themen": ["Sprachebenen", "Jugendsprache", "Sprachgeschichte"]},
                "lesen": {"name": "Lesen", "seiten": "109-155", "themen": ["Novelle", "Drama", "Lyrik"]}
            }
        },
        "deutschbuch_9": {
            "id": "deutschbuch_9",
            "name": "Deutschbuch 9",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062417-0",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern und Debattieren", "seiten": "10-60", "themen": ["Textgebundene Erörterung", "Essay", "Debatte"]},
                "analysieren": {"name": "Analysieren vertieft", "seiten": "61-115", "themen": ["Redeanalyse", "Werbung", "Filmanalyse"]},
                "rechtschreibung": {"name": "Rechtschreibung", "seiten": "230-275", "themen": ["Wissenschaftliches Schreiben", "Quellen", "Prüfung"]},
                "grammatik": {"name": "Grammatik", "seiten": "180-229", "themen": ["Sprachkritik", "Manipulation", "Kommunikation"]},
                "lesen": {"name": "Lesen", "seiten": "116-165", "themen": ["Gegenwartsliteratur", "Klassiker", "Epochen"]}
            }
        },
        "deutschbuch_10": {
            "id": "deutschbuch_10",
            "name": "Deutschbuch 10",
            "verlag": "Cornelsen",
            "isbn": "978-3-06-062418-7",
            "klassenstufe": "9/10",
            "kapitel": {
                "argumentieren": {"name": "Erörtern Prüfungsniveau", "seiten": "8-62", "themen": ["Literarische Erörterung", "Materialgestützt", "Rezension"]},
                "analysieren": {"name": "Interpretation vertieft", "seiten": "63-120", "themen": ["Gedichtvergleich", "Dramenanalyse", "Romananalyse"]},
                "rechtschreibung": {"name": "Abschlusstraining", "seiten": "235-280", "themen": ["Prüfungsformate", "Zeitmanagement", "Fehleranalyse"]},
                "grammatik": {"name": "Grammatik", "seiten": "185-234", "themen": ["Bewerbung", "Fachsprache", "Rhetorik"]},
                "lesen": {"name": "Literaturgeschichte", "seiten": "121-170", "themen": ["Epochenüberblick", "Werkvergleich", "Literaturkritik"]}
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
        let books = SCHULBUECHER_DEUTSCH.as_object().unwrap();
        // 5 Reihen mit je 6 Bänden plus der Eintrag ohne Schulbuchbezug
        assert_eq!(books.len(), 31);
        assert!(books.contains_key("kein_schulbuch"));
    }

    #[test]
    fn test_book_fields() {
        let book = &SCHULBUECHER_DEUTSCH["praxis_sprache_5"];
        assert_eq!(book["verlag"], "Westermann");
        assert_eq!(book["kapitel"].as_object().unwrap().len(), 5);
    }
}
