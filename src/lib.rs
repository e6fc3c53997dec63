//! Census registry identity verification client.
//!
//! Verifies a citizen's document number against the official census web
//! service: the document number is validated locally, embedded in a signed
//! SOAP envelope, POSTed to the configured registry endpoint, and the
//! response's return code is turned into a verdict. Each verification is a
//! single synchronous request with no retries and no state kept between
//! calls.

pub mod config;
pub mod error;
pub mod verification;

pub use config::{CensusConfig, load_config};
pub use error::{FieldError, VerifyError};
pub use verification::{CensusVerificationClient, VerificationRequest, VerificationResult};
