//! HTTP client for the external PDF generator service.
//!
//! The service accepts the invoice record as JSON and answers with the
//! rendered PDF bytes. Exactly one attempt is made per submission; all
//! failure modes collapse into the same user-facing status line.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::Invoice;

/// Where the original deployment runs the generator service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const GENERATE_PATH: &str = "/generate-invoice";

/// Status line shown next to the submit button.
pub const SUCCESS_MESSAGE: &str = "✅ Invoice generated successfully!";
/// Generic failure line; the UI does not distinguish failure causes.
pub const FAILURE_MESSAGE: &str = "❌ Error generating invoice.";

/// Errors from a submission attempt.
///
/// Callers showing these to users should prefer [`status_message`] — the
/// form surfaces one generic failure line regardless of cause.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("generator returned HTTP {0}")]
    Http(u16),

    /// The PDF could not be written to disk.
    #[error("could not save PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Where the PDF was saved: `{out_dir}/{invoice_number}.pdf`.
    pub pdf_path: PathBuf,
    /// Size of the downloaded document.
    pub bytes_written: usize,
}

/// Map a submission outcome to the status line the form displays.
pub fn status_message<E>(outcome: &Result<SubmitReceipt, E>) -> &'static str {
    match outcome {
        Ok(_) => SUCCESS_MESSAGE,
        Err(_) => FAILURE_MESSAGE,
    }
}

/// Client for the generator service.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    base_url: String,
    client: reqwest::Client,
}

impl GeneratorClient {
    /// Create a client against the default local service.
    pub fn new() -> Result<Self, SubmitError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific host, e.g. `"http://10.0.0.5:8000"`.
    /// A trailing slash on the base URL is tolerated.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, client })
    }

    /// The full endpoint URL submissions are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    /// Submit the invoice and save the returned PDF under `out_dir`.
    ///
    /// Serializes the invoice as the JSON request body, posts it once, and
    /// on a 2xx response writes the body to `{invoice_number}.pdf` in
    /// `out_dir`. No retry is attempted on failure.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Network`] on transport failure, [`SubmitError::Http`]
    /// for any non-success status, [`SubmitError::Io`] if the file cannot
    /// be written. No PDF is saved unless the response was successful.
    pub async fn submit(
        &self,
        invoice: &Invoice,
        out_dir: &Path,
    ) -> Result<SubmitReceipt, SubmitError> {
        let resp = self
            .client
            .post(self.endpoint())
            .json(invoice)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SubmitError::Http(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let pdf_path = out_dir.join(pdf_filename(invoice));
        std::fs::write(&pdf_path, &body)?;

        Ok(SubmitReceipt {
            pdf_path,
            bytes_written: body.len(),
        })
    }
}

/// Download name for an invoice's PDF: `{invoice_number}.pdf`.
pub fn pdf_filename(invoice: &Invoice) -> String {
    format!("{}.pdf", invoice.invoice_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = GeneratorClient::with_base_url("http://10.1.2.3:8000").unwrap();
        assert_eq!(client.endpoint(), "http://10.1.2.3:8000/generate-invoice");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = GeneratorClient::with_base_url("http://10.1.2.3:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://10.1.2.3:8000/generate-invoice");
    }

    #[test]
    fn default_base_url_is_local_service() {
        let client = GeneratorClient::new().unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/generate-invoice");
    }

    #[test]
    fn pdf_named_after_invoice_number() {
        let mut invoice = Invoice::blank();
        invoice.invoice_number = "INV-2024-17".into();
        assert_eq!(pdf_filename(&invoice), "INV-2024-17.pdf");
    }

    #[test]
    fn status_messages_collapse_failures() {
        let ok: Result<SubmitReceipt, SubmitError> = Ok(SubmitReceipt {
            pdf_path: PathBuf::from("INV-1.pdf"),
            bytes_written: 4,
        });
        assert_eq!(status_message(&ok), SUCCESS_MESSAGE);

        let http: Result<SubmitReceipt, SubmitError> = Err(SubmitError::Http(500));
        let net: Result<SubmitReceipt, SubmitError> =
            Err(SubmitError::Network("connection refused".into()));
        assert_eq!(status_message(&http), FAILURE_MESSAGE);
        assert_eq!(status_message(&net), FAILURE_MESSAGE);
    }
}
