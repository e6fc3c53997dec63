//! Verification module - signed census lookup and host identity boundary.
pub mod client;
pub mod envelope;
pub mod identity;
pub mod request;
pub mod response;
pub mod signature;

pub use client::CensusVerificationClient;
pub use envelope::SignedEnvelope;
pub use identity::{metadata, unique_id};
pub use request::{VerificationRequest, validate};
pub use response::{RETURN_CODE_VERIFIED, VerificationResult, extract_return_code};
pub use signature::create_signature;
