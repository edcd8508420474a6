pub mod backend;
pub mod charts;
pub mod client;
pub mod error;
pub mod loader;
pub mod state;

pub use backend::{Backend, Workbook};
pub use charts::{ChartHandle, ChartRenderer, ChartSlots};
pub use client::HttpBackend;
pub use error::{AppError, Result};
pub use loader::DatasetLoader;
pub use state::UiState;
