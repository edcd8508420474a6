use costboard_core::{Series, SlotKind};
use extract::{CostPayload, sample_series, upload_series};

use crate::backend::{Backend, Workbook};
use crate::charts::ChartRenderer;
use crate::error::Result;
use crate::state::UiState;

pub const STATUS_NO_FILE: &str = "Select a file first";
pub const STATUS_UPLOADING: &str = "Uploading...";
pub const STATUS_UPLOADED: &str = "Rendered charts from uploaded file";
pub const STATUS_NO_BACKEND: &str = "No backend detected; loading sample data";
pub const STATUS_SAMPLE_SHOWN: &str = "Displayed sample data";
pub const STATUS_NO_SAMPLE: &str = "No sample data available";

const SAMPLE_TITLE_SUFFIX: &str = " (sample)";

/// Orchestrates the two load paths: user-initiated upload when a backend
/// is present, and the automatic sample fallback when it is not.
///
/// Every failure is caught here and turned into a status message; neither
/// entry point returns an error, retries, or times out.
pub struct DatasetLoader<B, R> {
    backend: B,
    renderer: R,
}

impl<B: Backend, R: ChartRenderer> DatasetLoader<B, R> {
    pub fn new(backend: B, renderer: R) -> Self {
        Self { backend, renderer }
    }

    /// Mode A: upload a workbook and chart the server's aggregation.
    pub fn upload(&mut self, ui: &mut UiState, workbook: Option<&Workbook>) {
        let Some(workbook) = workbook else {
            ui.set_status(STATUS_NO_FILE);
            return;
        };
        ui.set_status(STATUS_UPLOADING);
        match self.try_upload(ui, workbook) {
            Ok(()) => ui.set_status(STATUS_UPLOADED),
            Err(err) => ui.set_status(format!("Error: {err}")),
        }
    }

    fn try_upload(&mut self, ui: &mut UiState, workbook: &Workbook) -> Result<()> {
        let payload = self.backend.import_workbook(workbook)?;
        self.render_payload(ui, &payload, upload_series, "");
        Ok(())
    }

    /// Mode B: probe the backend once at startup; when absent, chart the
    /// static sample data instead. A healthy probe leaves the charts
    /// untouched so a later upload owns them.
    pub fn load_sample_if_no_backend(&mut self, ui: &mut UiState) {
        if self.backend.probe_health().is_ok() {
            return;
        }
        ui.set_status(STATUS_NO_BACKEND);
        match self.try_load_sample(ui) {
            Ok(()) => ui.set_status(STATUS_SAMPLE_SHOWN),
            Err(_) => ui.set_status(STATUS_NO_SAMPLE),
        }
    }

    fn try_load_sample(&mut self, ui: &mut UiState) -> Result<()> {
        let payload = self.backend.fetch_sample()?;
        self.render_payload(ui, &payload, sample_series, SAMPLE_TITLE_SUFFIX);
        Ok(())
    }

    fn render_payload(
        &mut self,
        ui: &mut UiState,
        payload: &CostPayload,
        series_of: fn(&[serde_json::Value], &str) -> Series,
        title_suffix: &str,
    ) {
        for (slot, rows) in [
            (SlotKind::Monthly, &payload.monthly),
            (SlotKind::Quarterly, &payload.quarterly),
        ] {
            let series = series_of(rows, slot.primary_key());
            let title = format!("{}{}", slot.base_title(), title_suffix);
            let handle = self.renderer.render(&series.labels, &series.values, &title);
            ui.charts.replace(slot, handle);
        }
    }
}
