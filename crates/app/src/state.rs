use crate::charts::ChartSlots;

/// Everything a load cycle mutates: the status line and the two chart
/// slots. Owned by the caller and passed by mutable reference into both
/// operational modes, so there is no ambient shared state to race on.
#[derive(Default)]
pub struct UiState {
    status: String,
    pub charts: ChartSlots,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
