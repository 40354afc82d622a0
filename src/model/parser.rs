// File: ./src/model/parser.rs
// Line scanner for the plain-text calendar blocks
use crate::client::CalendarDocument;
use crate::model::{DayOfWeek, EventRecord, Meridiem};
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<day_of_week>Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday),\s+(?P<month>[a-zA-Z]{3})\.\s+(?P<day>[0-9]{1,2})",
    )
    .expect("regex is compile-time constant")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<time>[0-9]{1,2}:[0-9]{2})\s+(?P<am_pm>AM|PM)")
        .expect("regex is compile-time constant")
});

static DOCKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<docket>[0-9]{2,4}-[0-9]{1,2}-[0-9]{2})\s+(?P<category>.*)$")
        .expect("regex is compile-time constant")
});

// Captures everything before the first two-space run. Location lines are
// printed indented under their time line, padded out with spaces.
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<location>.*?)\s{2}").expect("regex is compile-time constant"));

/// Running parse state for one block. Fields accumulate across consecutive
/// lines and are cleared only at blank-line boundaries, never after a record
/// is emitted, so one date/time pair can complete several dockets.
#[derive(Debug, Default)]
struct EventAccumulator {
    day_of_week: Option<DayOfWeek>,
    day: Option<String>,
    month: Option<String>,
    time: Option<String>,
    am_pm: Option<Meridiem>,
    location: Option<String>,
    docket: Option<String>,
    category: Option<String>,
    expect_location: bool,
}

impl EventAccumulator {
    /// Blank-line boundary: drop every accumulated field. The pending
    /// location flag carries over the boundary.
    fn reset(&mut self) {
        let expect_location = self.expect_location;
        *self = Self {
            expect_location,
            ..Self::default()
        };
    }

    fn apply_date(&mut self, caps: &Captures<'_>) {
        self.day_of_week = DayOfWeek::from_name(&caps["day_of_week"]);
        self.month = Some(caps["month"].to_string());
        self.day = Some(caps["day"].to_string());
    }

    fn apply_time(&mut self, caps: &Captures<'_>) {
        self.time = Some(caps["time"].to_string());
        self.am_pm = Meridiem::from_name(&caps["am_pm"]);
        self.expect_location = true;
    }

    fn apply_location(&mut self, caps: &Captures<'_>) {
        self.location = non_empty(&caps["location"]);
        self.expect_location = false;
    }

    fn apply_docket(&mut self, caps: &Captures<'_>) {
        self.docket = Some(caps["docket"].to_string());
        self.category = non_empty(&caps["category"]);
    }

    /// Completeness check: a record only exists once every field is present.
    fn freeze(&self, court_name: &str) -> Option<EventRecord> {
        Some(EventRecord {
            docket: self.docket.clone()?,
            category: self.category.clone()?,
            location: self.location.clone()?,
            day_of_week: self.day_of_week?,
            day: self.day.clone()?,
            month: self.month.clone()?,
            time: self.time.clone()?,
            am_pm: self.am_pm?,
            court_name: court_name.to_string(),
        })
    }
}

// An empty capture (e.g. a docket line with no trailing category) counts as
// an absent field, not a populated one.
fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Scans one preformatted calendar block and returns every hearing that
/// completes while reading it, in completion order.
///
/// The calendar interleaves date headers, time/location pairs and docket
/// lines; a docket already emitted earlier in the block is dropped when the
/// layout repeats it.
pub fn parse_event_block(text: &str, court_name: &str) -> Vec<EventRecord> {
    let mut events = Vec::new();
    let mut dockets: HashSet<String> = HashSet::new();
    let mut state = EventAccumulator::default();

    for line in text.split('\n') {
        if line.is_empty() {
            state.reset();
        }
        if let Some(caps) = DATE_RE.captures(line) {
            state.apply_date(&caps);
        }
        if let Some(caps) = TIME_RE.captures(line) {
            state.apply_time(&caps);
        } else if state.expect_location
            && let Some(caps) = LOCATION_RE.captures(line)
        {
            // The line after a time line carries the location; a line cannot
            // set both.
            state.apply_location(&caps);
        }
        if let Some(caps) = DOCKET_RE.captures(line) {
            state.apply_docket(&caps);
        }

        if let Some(event) = state.freeze(court_name)
            && !dockets.contains(&event.docket)
        {
            dockets.insert(event.docket.clone());
            events.push(event);
        }
    }

    events
}

/// Runs the block parser over every text block of a fetched calendar page,
/// preserving block order. An empty result is a normal outcome the caller
/// reports, not an error.
pub fn parse_court_calendar(calendar: &CalendarDocument, court_name: &str) -> Vec<EventRecord> {
    calendar
        .blocks()
        .iter()
        .flat_map(|block| parse_event_block(block, court_name))
        .collect()
}
