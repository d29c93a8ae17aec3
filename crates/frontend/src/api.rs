use sample_map_shared::error::LoadError;
use sample_map_shared::labels;
use sample_map_shared::models::Record;
use sample_map_shared::sheet::{parse_sheet, SheetFormat};

/// Map an HTTP status to a load result. Only 2xx counts as success.
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status(status))
    }
}

/// Text of the alert shown when loading fails.
pub fn failure_alert(err: &LoadError) -> String {
    labels::load_failure_message(&err.to_string())
}

async fn fetch_sheet(url: &str) -> Result<String, LoadError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    check_status(resp.status().as_u16())?;
    resp.text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Fetch the published sheet and parse it into records.
pub async fn load_samples(url: &str, format: &SheetFormat) -> Result<Vec<Record>, LoadError> {
    let text = fetch_sheet(url).await?;
    let records = parse_sheet(&text, format)?;
    tracing::info!(records = records.len(), "Loaded samples");
    Ok(records)
}
