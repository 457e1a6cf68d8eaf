use crate::domain::{Category, Summary, SummaryAggregator, WorkoutRecord, WorkoutStore};
use arboard::Clipboard;
use serde::Serialize;

#[derive(Serialize)]
struct ExportedRecord<'a> {
    category: Category,
    #[serde(flatten)]
    record: &'a WorkoutRecord,
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    summary: Summary,
    records: Vec<ExportedRecord<'a>>,
}

pub struct ClipboardExporter;

impl ClipboardExporter {
    /// Copies the plain-text workout report to the system clipboard.
    pub fn copy_report(store: &WorkoutStore) -> Result<String, String> {
        let report = SummaryAggregator::report(store).map_err(|e| e.to_string())?;
        Self::set_clipboard(report)?;
        Ok("Summary copied to clipboard".to_string())
    }

    /// Copies the summary and every record as pretty-printed JSON.
    pub fn copy_json(store: &WorkoutStore) -> Result<String, String> {
        let json = Self::summary_json(store)?;
        Self::set_clipboard(json)?;
        Ok("Summary JSON copied to clipboard".to_string())
    }

    pub fn summary_json(store: &WorkoutStore) -> Result<String, String> {
        let summary = SummaryAggregator::summarize(store).map_err(|e| e.to_string())?;
        let export = SummaryExport {
            summary,
            records: store
                .iter()
                .map(|(category, record)| ExportedRecord { category, record })
                .collect(),
        };
        serde_json::to_string_pretty(&export).map_err(|e| format!("Serialization failed: {}", e))
    }

    fn set_clipboard(text: String) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}
