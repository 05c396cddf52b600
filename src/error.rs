use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

/// Run-level failures. Anything that surfaces as one of these aborts the
/// current run; the checkpoint file keeps everything harvested so far, so the
/// operator simply restarts the process to resume.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Checkpoint JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WebDriver Error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Spreadsheet Error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
