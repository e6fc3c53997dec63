//! The census verification client.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::debug;

use super::envelope::SignedEnvelope;
use super::identity;
use super::request::{VerificationRequest, validate};
use super::response::{VerificationResult, extract_return_code};
use crate::config::CensusConfig;
use crate::error::VerifyError;

/// Client for the census registry's identity-verification service.
///
/// Holds immutable configuration and a pooled HTTP client; `verify` keeps
/// no state between calls, so one client can be shared across threads.
#[derive(Debug)]
pub struct CensusVerificationClient {
    config: CensusConfig,
    http: reqwest::blocking::Client,
}

impl CensusVerificationClient {
    /// Create a client from validated configuration.
    pub fn new(config: CensusConfig) -> Result<Self, VerifyError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    /// Verify one document number against the census registry.
    ///
    /// Blank input returns an unverified result without touching the
    /// network; invalid input fails validation before any request is
    /// built. Otherwise exactly one signed POST is issued and the
    /// response's `codiRetorn` decides the verdict.
    ///
    /// # Arguments
    /// * `document_number` - Citizen document number, ASCII alphanumeric
    ///
    /// # Returns
    /// The verdict, or a validation / network / parse error. Every error
    /// is terminal for this attempt; there is no retry.
    pub fn verify(&self, document_number: &str) -> Result<VerificationResult, VerifyError> {
        if document_number.is_empty() {
            debug!("blank document number, skipping census call");
            return Ok(VerificationResult::unverified());
        }

        let request = VerificationRequest::new(document_number);
        validate(&request).map_err(VerifyError::Validation)?;

        let envelope = SignedEnvelope::from_config(&self.config);
        let body = envelope.render(&request.document_number);

        let endpoint = self.config.get_endpoint();
        debug!(%endpoint, "posting census verification request");

        let response = self
            .http
            .post(&endpoint)
            .header("Content-Type", "text/xml")
            .body(body)
            .send()?;

        // The registry signals everything through codiRetorn; the HTTP
        // status line is not consulted.
        let response_body = response.text()?;
        let code = extract_return_code(&response_body)?;

        let result = VerificationResult::from_return_code(code);
        debug!(
            verified = result.verified,
            code = result.raw_response_code.as_deref().unwrap_or("-"),
            "census verdict"
        );

        Ok(result)
    }

    /// Stable per-citizen id for the host's authorization records.
    pub fn unique_id(&self, document_number: &str) -> String {
        identity::unique_id(document_number, &self.config.app_secret)
    }

    /// Metadata mapping for the host's authorization records.
    pub fn metadata(&self) -> BTreeMap<String, String> {
        identity::metadata()
    }
}
