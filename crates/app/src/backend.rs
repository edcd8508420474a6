use std::path::Path;

use extract::CostPayload;

use crate::error::Result;

/// A spreadsheet picked for upload: the bytes plus the file name the
/// multipart form carries.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Workbook {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.xlsx")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

/// The cost-analytics server as seen from the client.
///
/// `probe_health` answers "is a backend there at all"; any error means
/// absent. `import_workbook` is the upload round trip; a rejection with a
/// server-provided detail message comes back as [`crate::AppError::Rejected`].
pub trait Backend {
    fn probe_health(&self) -> Result<()>;
    fn import_workbook(&self, workbook: &Workbook) -> Result<CostPayload>;
    fn fetch_sample(&self) -> Result<CostPayload>;
}
