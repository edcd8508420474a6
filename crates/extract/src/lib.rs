mod payload;
mod rows;

pub use payload::CostPayload;
pub use rows::{bucket_label, sample_cost_value, sample_series, upload_cost_value, upload_series};
