use anyhow::{Context, Result, bail};
use scraper::{Html, Selector};
use std::time::Duration;

/// A fetched calendar page reduced to its preformatted text regions. Each
/// `<pre>` element is one printable calendar block.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    blocks: Vec<String>,
}

impl CalendarDocument {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let selector = Selector::parse("pre").expect("selector is compile-time constant");
        let blocks = document
            .select(&selector)
            .map(|pre| pre.text().collect::<String>())
            .collect();
        Self { blocks }
    }

    /// Builds a document from already-extracted text blocks.
    pub fn from_blocks(blocks: Vec<String>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

/// Blocking HTTP fetcher for the configured calendar pages.
#[derive(Debug, Clone)]
pub struct CourtClient {
    http: reqwest::blocking::Client,
}

impl CourtClient {
    pub fn new() -> Result<Self> {
        // Timeouts so one unresponsive court server cannot stall the run
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http })
    }

    /// Fetches one calendar page. A non-success status is an error here; the
    /// caller logs it and moves on to the next calendar.
    pub fn fetch(&self, url: &str) -> Result<CalendarDocument> {
        let response = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("request to {url} failed"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("{url} returned HTTP {status}");
        }
        let body = response
            .text()
            .with_context(|| format!("reading body from {url}"))?;
        Ok(CalendarDocument::from_html(&body))
    }
}
