use metrics_exporter_prometheus::PrometheusHandle;
use mindshift::error::AppError;
use mindshift::personality::{import_answers_path, AnswerSet};
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads answers from a `.csv` export or a JSON object keyed `q1..q24`.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        return import_answers_path(path).map_err(AppError::from);
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads the prompt texts in the order they were shown, as a JSON array.
pub(crate) fn load_question_order(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
