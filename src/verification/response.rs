//! Census response parsing.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;

/// Return code the registry sends for a positive census match.
///
/// The service answers "KO" for a resident it can verify and "OK"
/// otherwise; verification matches on the literal "KO".
pub const RETURN_CODE_VERIFIED: &str = "KO";

/// Verdict of one verification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// Whether the registry confirmed the document number.
    pub verified: bool,
    /// Raw `codiRetorn` value, if the response carried one.
    pub raw_response_code: Option<String>,
}

impl VerificationResult {
    /// Result for input that never reached the network.
    pub fn unverified() -> Self {
        Self {
            verified: false,
            raw_response_code: None,
        }
    }

    /// Build a verdict from a parsed return code.
    pub fn from_return_code(code: Option<String>) -> Self {
        Self {
            verified: code.as_deref() == Some(RETURN_CODE_VERIFIED),
            raw_response_code: code,
        }
    }
}

/// Extract the text of the first `codiRetorn` element.
///
/// Namespaces are ignored: the element is matched by local name, whatever
/// prefix the registry happens to bind. A well-formed body without the
/// element yields `None`; a malformed body is an error.
pub fn extract_return_code(body: &str) -> Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(body);
    let mut code: Option<String> = None;
    let mut in_return_code = false;

    // Drive the reader to EOF even after the code is found, so a body
    // that turns malformed later still fails the whole call.
    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.local_name().as_ref() == b"codiRetorn" => {
                in_return_code = code.is_none();
            }
            Event::Text(ref t) if in_return_code => {
                code = Some(t.unescape()?.trim().to_string());
                in_return_code = false;
            }
            Event::End(ref e) if e.local_name().as_ref() == b"codiRetorn" => {
                if in_return_code {
                    // Element closed without a text node.
                    code = Some(String::new());
                    in_return_code = false;
                }
            }
            Event::Empty(ref e) if e.local_name().as_ref() == b"codiRetorn" => {
                if code.is_none() {
                    code = Some(String::new());
                }
            }
            Event::Eof => return Ok(code),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_code_with_any_prefix() {
        let body = r#"<?xml version="1.0"?>
            <cens:resposta xmlns:cens="http://soap.service.acme.com">
                <cens:codiRetorn>KO</cens:codiRetorn>
            </cens:resposta>"#;

        assert_eq!(extract_return_code(body).unwrap(), Some("KO".to_string()));
    }

    #[test]
    fn test_extracts_code_without_namespace() {
        let body = "<resposta><codiRetorn>OK</codiRetorn></resposta>";

        assert_eq!(extract_return_code(body).unwrap(), Some("OK".to_string()));
    }

    #[test]
    fn test_missing_element_is_none() {
        let body = "<resposta><altreCamp>KO</altreCamp></resposta>";

        assert_eq!(extract_return_code(body).unwrap(), None);
    }

    #[test]
    fn test_first_code_wins() {
        let body = "<r><codiRetorn>KO</codiRetorn><codiRetorn>OK</codiRetorn></r>";

        assert_eq!(extract_return_code(body).unwrap(), Some("KO".to_string()));
    }

    #[test]
    fn test_malformed_tail_is_error() {
        // The code is present but the document never closes cleanly.
        let body = "<r><codiRetorn>KO</codiRetorn></wrong>";

        assert!(extract_return_code(body).is_err());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let body = "<resposta><codiRetorn>KO</oops></resposta>";

        assert!(extract_return_code(body).is_err());
    }

    #[test]
    fn test_verdict_polarity() {
        let verified = VerificationResult::from_return_code(Some("KO".to_string()));
        assert!(verified.verified);
        assert_eq!(verified.raw_response_code.as_deref(), Some("KO"));

        let rejected = VerificationResult::from_return_code(Some("OK".to_string()));
        assert!(!rejected.verified);

        let absent = VerificationResult::from_return_code(None);
        assert!(!absent.verified);
        assert_eq!(absent.raw_response_code, None);
    }
}
