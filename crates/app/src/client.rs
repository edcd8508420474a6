use reqwest::blocking::multipart;
use serde_json::Value;

use extract::CostPayload;

use crate::backend::{Backend, Workbook};
use crate::error::{AppError, Result};

const DEFAULT_REJECTION: &str = "Upload failed";

/// HTTP implementation of [`Backend`].
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for HttpBackend {
    fn probe_health(&self) -> Result<()> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .map_err(|err| AppError::Network(err.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Network(format!(
                "health check returned {}",
                response.status()
            )))
        }
    }

    fn import_workbook(&self, workbook: &Workbook) -> Result<CostPayload> {
        let part = multipart::Part::bytes(workbook.bytes.clone())
            .file_name(workbook.file_name.clone());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/import-excel"))
            .multipart(form)
            .send()
            .map_err(|err| AppError::Network(err.to_string()))?;

        if !response.status().is_success() {
            let detail = response
                .json::<Value>()
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|value| value.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            return Err(AppError::Rejected(detail));
        }

        response
            .json()
            .map_err(|err| AppError::Parse(err.to_string()))
    }

    fn fetch_sample(&self) -> Result<CostPayload> {
        let response = self
            .client
            .get(self.url("/static/sample-data.json"))
            .send()
            .map_err(|err| AppError::Network(err.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "sample data fetch returned {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|err| AppError::Parse(err.to_string()))
    }
}
