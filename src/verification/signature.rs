//! SHA1 request signing for the census web service.

use sha1::{Digest, Sha1};

/// Uppercase hex SHA1 digest, the encoding the registry expects everywhere.
pub fn sha1_hex_upper(data: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Derive the inner signing key from the shared key and the private key.
pub fn inner_key(shared_key: &str, private_key: &str) -> String {
    sha1_hex_upper(&format!("{shared_key}{private_key}"))
}

/// Compute the envelope signature (`signaturaID`).
///
/// The registry verifies SHA1 over the concatenation of the date stamp
/// (DDMMYYYY), time stamp (HHMMSS), domain, identity, the derived inner
/// key and the private key, in that order.
pub fn create_signature(
    date_stamp: &str,
    time_stamp: &str,
    domain: &str,
    identity: &str,
    shared_key: &str,
    private_key: &str,
) -> String {
    let inner = inner_key(shared_key, private_key);
    sha1_hex_upper(&format!(
        "{date_stamp}{time_stamp}{domain}{identity}{inner}{private_key}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_hex_upper_format() {
        let digest = sha1_hex_upper("hello");

        assert_eq!(digest.len(), 40);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_inner_key_known_vector() {
        // SHA1("KP"), uppercased.
        assert_eq!(
            inner_key("K", "P"),
            "5969AE85371DE5CBEF3F5C3FF2B1BA2FE346EC87"
        );
    }

    #[test]
    fn test_create_signature_known_vector() {
        // SHA1("01012024" + "120000" + "D" + "I" + SHA1("KP").upper + "P"),
        // reproducible with any independent SHA1 implementation.
        let signature = create_signature("01012024", "120000", "D", "I", "K", "P");

        assert_eq!(signature, "90163985A9DE4C9097046AFBF1BA80C4CA60FBA4");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = create_signature("01012024", "120000", "D", "I", "K", "P");
        let b = create_signature("01012024", "120000", "D", "I", "K", "P");
        assert_eq!(a, b);

        // Any changed input changes the signature.
        let c = create_signature("02012024", "120000", "D", "I", "K", "P");
        assert_ne!(a, c);
    }
}
