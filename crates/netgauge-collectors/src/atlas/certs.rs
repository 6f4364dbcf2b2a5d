//! Certificate chain validation for TLS probe results.
//!
//! Atlas `sslcert` results carry the chain the probe received as PEM
//! strings, end-entity first. A chain is valid when it builds to a trusted
//! root, every certificate is within its validity period at the check time,
//! and the end-entity certificate is valid for the target host.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rustls_pki_types::{CertificateDer, ServerName, TrustAnchor, UnixTime};
use webpki::{EndEntityCert, KeyUsage, ALL_VERIFICATION_ALGS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertError {
    #[error("empty certificate chain")]
    EmptyChain,

    #[error("malformed PEM: {0}")]
    Pem(String),

    #[error("invalid server name: {0}")]
    ServerName(String),

    #[error("certificate rejected: {0}")]
    Rejected(String),
}

fn rejected(error: webpki::Error) -> CertError {
    CertError::Rejected(format!("{error:?}"))
}

/// Decode every certificate in a PEM string.
pub fn parse_pem(pem: &str) -> Result<Vec<CertificateDer<'static>>, CertError> {
    rustls_pemfile::certs(&mut pem.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertError::Pem(e.to_string()))
}

/// Verifies probe chains against a fixed set of trust anchors.
#[derive(Debug, Clone)]
pub struct CertVerifier {
    anchors: Vec<TrustAnchor<'static>>,
}

impl CertVerifier {
    /// Mozilla's root program, as bundled by `webpki-roots`.
    pub fn webpki_roots() -> Self {
        Self {
            anchors: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
        }
    }

    pub fn with_anchors(anchors: Vec<TrustAnchor<'static>>) -> Self {
        Self { anchors }
    }

    /// Trust exactly the certificates in `pem`.
    pub fn from_pem_roots(pem: &str) -> Result<Self, CertError> {
        let anchors = parse_pem(pem)?
            .iter()
            .map(|der| {
                webpki::anchor_from_trusted_cert(der)
                    .map(|anchor| anchor.to_owned())
                    .map_err(rejected)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { anchors })
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Verify a DER chain, end-entity first, for `host` at time `at`.
    pub fn verify(
        &self,
        chain: &[CertificateDer<'_>],
        host: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CertError> {
        let (end_entity, intermediates) = chain.split_first().ok_or(CertError::EmptyChain)?;
        let server_name =
            ServerName::try_from(host).map_err(|_| CertError::ServerName(host.to_string()))?;
        let time = UnixTime::since_unix_epoch(Duration::from_secs(
            u64::try_from(at.timestamp()).unwrap_or(0),
        ));

        let cert = EndEntityCert::try_from(end_entity).map_err(rejected)?;
        cert.verify_for_usage(
            ALL_VERIFICATION_ALGS,
            &self.anchors,
            intermediates,
            time,
            KeyUsage::server_auth(),
            None,
            None,
        )
        .map_err(rejected)?;
        cert.verify_is_valid_for_subject_name(&server_name)
            .map_err(rejected)
    }

    /// Verify a chain given as PEM strings, as Atlas reports it.
    pub fn verify_pem_chain(
        &self,
        pems: &[&str],
        host: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CertError> {
        let mut chain = Vec::with_capacity(pems.len());
        for pem in pems {
            chain.extend(parse_pem(pem)?);
        }
        self.verify(&chain, host, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ROOT: &str = include_str!("../../tests/fixtures/tls/root.pem");
    const INTERMEDIATE: &str = include_str!("../../tests/fixtures/tls/intermediate.pem");
    const LEAF: &str = include_str!("../../tests/fixtures/tls/leaf.pem");
    const EXPIRED: &str = include_str!("../../tests/fixtures/tls/expired.pem");

    fn verifier() -> CertVerifier {
        CertVerifier::from_pem_roots(ROOT).unwrap()
    }

    fn june_2026() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn chain_to_trusted_root_is_valid() {
        assert_eq!(verifier().anchor_count(), 1);
        verifier()
            .verify_pem_chain(&[LEAF, INTERMEDIATE], "www.example.com", june_2026())
            .unwrap();
    }

    #[test]
    fn expired_leaf_is_rejected() {
        let err = verifier()
            .verify_pem_chain(&[EXPIRED, INTERMEDIATE], "www.example.com", june_2026())
            .unwrap_err();
        assert!(matches!(err, CertError::Rejected(_)));
    }

    #[test]
    fn leaf_is_rejected_before_its_validity_period() {
        let before = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        assert!(verifier()
            .verify_pem_chain(&[LEAF, INTERMEDIATE], "www.example.com", before)
            .is_err());
    }

    #[test]
    fn wrong_host_is_rejected() {
        let err = verifier()
            .verify_pem_chain(&[LEAF, INTERMEDIATE], "www.paypal.com", june_2026())
            .unwrap_err();
        assert!(matches!(err, CertError::Rejected(_)));
    }

    #[test]
    fn missing_intermediate_is_rejected() {
        assert!(verifier()
            .verify_pem_chain(&[LEAF], "www.example.com", june_2026())
            .is_err());
    }

    #[test]
    fn untrusted_root_is_rejected() {
        assert!(CertVerifier::webpki_roots()
            .verify_pem_chain(&[LEAF, INTERMEDIATE], "www.example.com", june_2026())
            .is_err());
    }

    #[test]
    fn garbage_is_not_a_chain() {
        assert_eq!(
            verifier().verify_pem_chain(&["not a certificate at all"], "www.example.com", june_2026()),
            Err(CertError::EmptyChain)
        );
    }
}
