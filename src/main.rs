use anyhow::Result;
use chrono::Local;
use courtcal::client::CourtClient;
use courtcal::config::Config;
use courtcal::model::parse_court_calendar;
use courtcal::writer;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: courtcal <OUTPUT_DIR>");
        eprintln!("Or list calendars at ~/.config/courtcal/config.toml");
        return Ok(());
    }
    let write_dir = PathBuf::from(&args[1]);

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config file unreadable ({e}), using built-in calendar list");
            Config::default()
        }
    };

    let client = CourtClient::new()?;
    let date = Local::now().date_naive();

    for calendar in &config.calendars {
        let document = match client.fetch(&calendar.url) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Skipping {}: {e}", calendar.name);
                continue;
            }
        };

        let events = parse_court_calendar(&document, &calendar.name);
        if events.is_empty() {
            info!("No data found for {} at {}", calendar.name, calendar.url);
            continue;
        }

        let path = writer::write_events(&write_dir, &calendar.name, date, &events)?;
        info!("Wrote {} records to {}", events.len(), path.display());
    }

    Ok(())
}
