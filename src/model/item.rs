use serde::Serialize;

/// Day names as printed on the calendar's date header lines.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Self::Monday),
            "Tuesday" => Some(Self::Tuesday),
            "Wednesday" => Some(Self::Wednesday),
            "Thursday" => Some(Self::Thursday),
            "Friday" => Some(Self::Friday),
            "Saturday" => Some(Self::Saturday),
            "Sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    AM,
    PM,
}

impl Meridiem {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AM" => Some(Self::AM),
            "PM" => Some(Self::PM),
            _ => None,
        }
    }
}

/// One scheduled hearing. Field order here is the CSV column order, so the
/// writer derives its header row from this declaration.
///
/// `day`, `month` and `time` stay as the strings the calendar printed; the
/// parser checks shape, not meaning, and malformed-but-matching values pass
/// through untouched.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub docket: String,
    pub category: String,
    pub location: String,
    pub day_of_week: DayOfWeek,
    pub day: String,
    pub month: String,
    pub time: String,
    pub am_pm: Meridiem,
    pub court_name: String,
}
