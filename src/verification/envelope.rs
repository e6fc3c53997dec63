//! Signed SOAP envelope construction.

use chrono::Local;
use quick_xml::escape::escape;

use super::signature::create_signature;
use crate::config::CensusConfig;

/// Signing fields of one outbound envelope.
///
/// Computed fresh per request from the wall clock; never persisted. The
/// same stamps that go into the signature go onto the wire, so the
/// registry can recompute it.
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    pub identity: String,
    pub shared_key: String,
    pub domain: String,
    pub date_stamp: String,
    pub time_stamp: String,
    pub signature: String,
}

impl SignedEnvelope {
    /// Build an envelope stamped with the current local time.
    pub fn from_config(config: &CensusConfig) -> Self {
        let now = Local::now();
        Self::at(
            config,
            &now.format("%d%m%Y").to_string(),
            &now.format("%H%M%S").to_string(),
        )
    }

    /// Build an envelope with explicit stamps. Split out from
    /// [`SignedEnvelope::from_config`] so signing stays deterministic
    /// under test.
    pub fn at(config: &CensusConfig, date_stamp: &str, time_stamp: &str) -> Self {
        let signature = create_signature(
            date_stamp,
            time_stamp,
            &config.domain,
            &config.identity,
            &config.shared_key,
            &config.private_key,
        );

        Self {
            identity: config.identity.clone(),
            shared_key: config.shared_key.clone(),
            domain: config.domain.clone(),
            date_stamp: date_stamp.to_string(),
            time_stamp: time_stamp.to_string(),
            signature,
        }
    }

    /// Render the SOAP 1.1 request body for one document number.
    ///
    /// The document number is uppercased and XML-escaped before it is
    /// embedded, so a hostile value cannot break out of its element.
    pub fn render(&self, document_number: &str) -> String {
        let document = document_number.to_uppercase();
        let document = escape(document.as_str());

        format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:soap="http://soap.service.acme.com">
   <soapenv:Header/>
   <soapenv:Body>
      <soap:getOKPRESPART>
         <soap:numscens>
            <soap:numscens>{document}</soap:numscens>
         </soap:numscens>
         <soap:IDENTIFICACIO>
            <soap:clauID>{shared_key}</soap:clauID>
            <soap:dataID>{date_stamp}</soap:dataID>
            <soap:horaID>{time_stamp}</soap:horaID>
            <soap:identitatID>{identity}</soap:identitatID>
            <soap:mqconfiID>{domain}</soap:mqconfiID>
            <soap:signaturaID>{signature}</soap:signaturaID>
         </soap:IDENTIFICACIO>
      </soap:getOKPRESPART>
   </soapenv:Body>
</soapenv:Envelope>
"#,
            document = document,
            shared_key = self.shared_key,
            date_stamp = self.date_stamp,
            time_stamp = self.time_stamp,
            identity = self.identity,
            domain = self.domain,
            signature = self.signature,
        )
    }
}
