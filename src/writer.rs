use crate::model::EventRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Writes one CSV per court, named `<court_name>_<ISO date>.csv`. The header
/// row comes from the record's field order.
///
/// Callers only invoke this with a non-empty result set, so no empty output
/// files are ever created.
pub fn write_events(
    dir: &Path,
    court_name: &str,
    date: NaiveDate,
    events: &[EventRecord],
) -> Result<PathBuf> {
    let path = dir.join(format!("{}_{}.csv", court_name, date.format("%Y-%m-%d")));
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;
    Ok(path)
}
