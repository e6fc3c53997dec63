//! Host-framework identity boundary.
//!
//! The host authorization layer deduplicates verified citizens by a stable
//! per-citizen hash and stores a metadata mapping alongside it. Both are
//! produced here; neither touches the census service.

use std::collections::BTreeMap;

/// Stable per-citizen identifier for authorization deduplication.
///
/// MD5 over the uppercased document number joined to the host application
/// secret. Case-insensitive on the input: "x1234" and "X1234" collapse to
/// the same id.
pub fn unique_id(document_number: &str, app_secret: &str) -> String {
    let digest = md5::compute(format!(
        "{}-{}",
        document_number.to_uppercase(),
        app_secret
    ));
    format!("{digest:x}")
}

/// Metadata handed to the host's authorization record.
///
/// Empty: no enrichable attribute (birth date, gender, postal code) is
/// collected by this verification scheme.
pub fn metadata() -> BTreeMap<String, String> {
    BTreeMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_known_vector() {
        assert_eq!(
            unique_id("ABC123", "s3cr3t"),
            "d4d7a960278baf7d96ba1d56bc041e68"
        );
    }

    #[test]
    fn test_unique_id_case_insensitive() {
        assert_eq!(
            unique_id("abc123", "s3cr3t"),
            unique_id("ABC123", "s3cr3t")
        );
    }

    #[test]
    fn test_unique_id_distinguishes_documents_and_secrets() {
        let base = unique_id("ABC123", "s3cr3t");

        assert_ne!(base, unique_id("XYZ789", "s3cr3t"));
        assert_ne!(base, unique_id("ABC123", "other"));
    }

    #[test]
    fn test_metadata_is_empty() {
        assert!(metadata().is_empty());
    }
}
