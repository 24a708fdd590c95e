// Presentation layer: runs one fetch and renders the result. The spinner
// draws to stderr, so stdout stays clean JSON when piped.

use crate::api::ApiClient;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Fetch photos matching `filters` and pretty-print them to stdout as
/// indented JSON. A spinner is shown while the request is in flight; the
/// transport's timeout bounds how long that can be.
pub fn run(api: &ApiClient, filters: &[(String, Vec<String>)]) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Fetching photos...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = api.fetch_photos(filters);
    spinner.finish_and_clear();

    let photos = result?;
    let rendered =
        serde_json::to_string_pretty(&photos).context("Failed to encode photos as JSON")?;
    println!("{}", rendered);
    Ok(())
}
