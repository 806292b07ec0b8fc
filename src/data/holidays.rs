//! German school holidays and public holidays for 2025/2026, keyed by
//! Bundesland. Served verbatim by the holidays endpoints and consumed
//! by the statistics aggregation to subtract holiday weeks.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HolidayPeriod {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicHoliday {
    pub name: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Bundesland {
    pub id: &'static str,
    pub name: &'static str,
}

pub const BUNDESLAENDER: &[Bundesland] = &[
    Bundesland { id: "bayern", name: "Bayern" },
    Bundesland { id: "nrw", name: "Nordrhein-Westfalen" },
    Bundesland { id: "berlin", name: "Berlin" },
    Bundesland { id: "baden-wuerttemberg", name: "Baden-Württemberg" },
    Bundesland { id: "hessen", name: "Hessen" },
    Bundesland { id: "sachsen", name: "Sachsen" },
    Bundesland { id: "niedersachsen", name: "Niedersachsen" },
    Bundesland { id: "hamburg", name: "Hamburg" },
    Bundesland { id: "rheinland-pfalz", name: "Rheinland-Pfalz" },
];

pub fn holidays_for(bundesland: &str) -> Option<&'static [HolidayPeriod]> {
    match bundesland {
        "bayern" => Some(BAYERN),
        "nrw" => Some(NRW),
        "berlin" => Some(BERLIN),
        "baden-wuerttemberg" => Some(BADEN_WUERTTEMBERG),
        "hessen" => Some(HESSEN),
        "sachsen" => Some(SACHSEN),
        "niedersachsen" => Some(NIEDERSACHSEN),
        "hamburg" => Some(HAMBURG),
        "rheinland-pfalz" => Some(RHEINLAND_PFALZ),
        _ => None,
    }
}

const BAYERN: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-27", end: "2025-10-31" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-05" },
    HolidayPeriod { name: "Winterferien 2026", start: "2026-02-16", end: "2026-02-20" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-30", end: "2026-04-10" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-26", end: "2026-06-05" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-27", end: "2026-09-07" },
];

const NRW: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-13", end: "2025-10-25" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-06" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-30", end: "2026-04-11" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-26", end: "2026-05-26" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-06-29", end: "2026-08-11" },
];

const BERLIN: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-20", end: "2025-11-01" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-02" },
    HolidayPeriod { name: "Winterferien 2026", start: "2026-02-02", end: "2026-02-07" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-30", end: "2026-04-10" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-15", end: "2026-05-15" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-09", end: "2026-08-21" },
];

const BADEN_WUERTTEMBERG: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-27", end: "2025-10-30" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-05" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-04-06", end: "2026-04-17" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-26", end: "2026-06-06" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-30", end: "2026-09-12" },
];

const HESSEN: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-06", end: "2025-10-18" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-10" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-04-06", end: "2026-04-18" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-06", end: "2026-08-14" },
];

const SACHSEN: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-20", end: "2025-11-01" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-03" },
    HolidayPeriod { name: "Winterferien 2026", start: "2026-02-09", end: "2026-02-21" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-04-03", end: "2026-04-11" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-15", end: "2026-05-15" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-06-27", end: "2026-08-08" },
];

const NIEDERSACHSEN: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-20", end: "2025-10-31" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-05" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-23", end: "2026-04-04" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-22", end: "2026-05-22" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-16", end: "2026-08-26" },
];

const HAMBURG: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-20", end: "2025-10-31" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-02" },
    HolidayPeriod { name: "Frühjahrsferien 2026", start: "2026-02-02", end: "2026-02-13" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-06", end: "2026-03-20" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-05-11", end: "2026-05-15" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-23", end: "2026-09-02" },
];

const RHEINLAND_PFALZ: &[HolidayPeriod] = &[
    HolidayPeriod { name: "Herbstferien 2025", start: "2025-10-13", end: "2025-10-24" },
    HolidayPeriod { name: "Weihnachtsferien 2025/26", start: "2025-12-22", end: "2026-01-06" },
    HolidayPeriod { name: "Osterferien 2026", start: "2026-03-23", end: "2026-04-06" },
    HolidayPeriod { name: "Pfingstferien 2026", start: "2026-06-02", end: "2026-06-10" },
    HolidayPeriod { name: "Sommerferien 2026", start: "2026-07-06", end: "2026-08-14" },
];

pub const PUBLIC_HOLIDAYS: &[PublicHoliday] = &[
    PublicHoliday { name: "Neujahr", date: "2025-01-01" },
    PublicHoliday { name: "Karfreitag", date: "2025-04-18" },
    PublicHoliday { name: "Ostermontag", date: "2025-04-21" },
    PublicHoliday { name: "Tag der Arbeit", date: "2025-05-01" },
    PublicHoliday { name: "Christi Himmelfahrt", date: "2025-05-29" },
    PublicHoliday { name: "Pfingstmontag", date: "2025-06-09" },
    PublicHoliday { name: "Tag der Deutschen Einheit", date: "2025-10-03" },
    PublicHoliday { name: "1. Weihnachtstag", date: "2025-12-25" },
    PublicHoliday { name: "2. Weihnachtstag", date: "2025-12-26" },
    PublicHoliday { name: "Neujahr", date: "2026-01-01" },
    PublicHoliday { name: "Karfreitag", date: "2026-04-03" },
    PublicHoliday { name: "Ostermontag", date: "2026-04-06" },
    PublicHoliday { name: "Tag der Arbeit", date: "2026-05-01" },
    PublicHoliday { name: "Christi Himmelfahrt", date: "2026-05-14" },
    PublicHoliday { name: "Pfingstmontag", date: "2026-05-25" },
    PublicHoliday { name: "Tag der Deutschen Einheit", date: "2026-10-03" },
    PublicHoliday { name: "1. Weihnachtstag", date: "2026-12-25" },
    PublicHoliday { name: "2. Weihnachtstag", date: "2026-12-26" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bundesland_has_holidays() {
        let periods = holidays_for("rheinland-pfalz").unwrap();
        assert_eq!(periods.len(), 5);
        assert_eq!(periods[0].name, "Herbstferien 2025");
    }

    #[test]
    fn test_unknown_bundesland_is_none() {
        assert!(holidays_for("atlantis").is_none());
    }

    #[test]
    fn test_all_listed_bundeslaender_have_data() {
        for land in BUNDESLAENDER {
            assert!(holidays_for(land.id).is_some(), "{} missing", land.id);
        }
    }
}
