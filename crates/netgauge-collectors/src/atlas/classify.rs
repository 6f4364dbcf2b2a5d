//! Per-probe pass/fail classification of RIPE Atlas `latest` results.
//!
//! Each function takes the raw result array of one measurement and returns
//! how many probes failed out of how many counted. Probes a check cannot
//! judge are left out of the total.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::certs::CertVerifier;

/// Failed and counted probes for one measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeTally {
    pub failed: u64,
    pub total: u64,
}

impl ProbeTally {
    fn record(&mut self, passed: bool) {
        self.total += 1;
        if !passed {
            self.failed += 1;
        }
    }
}

/// JSON truthiness: null, false, zero, and empty strings, arrays and objects
/// are false.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Root server SOA checks: every result counts, those carrying an `error`
/// failed.
pub fn root_dns(results: &[Value]) -> ProbeTally {
    let mut tally = ProbeTally::default();
    for probe in results {
        tally.record(!truthy(probe.get("error")));
    }
    tally
}

/// Public resolver A queries: an answer count above zero passes, zero
/// answers or an `error` fails, anything else is not counted.
pub fn public_dns(results: &[Value]) -> ProbeTally {
    let mut tally = ProbeTally::default();
    for probe in results {
        match probe.get("result") {
            Some(result) if result.is_object() => {
                if let Some(answers) = result.get("ANCOUNT").and_then(Value::as_u64) {
                    tally.record(answers > 0);
                }
            }
            _ => {
                if truthy(probe.get("error")) {
                    tally.record(false);
                }
            }
        }
    }
    tally
}

/// NTP queries: passes when the first reply carries all six timing fields.
pub fn ntp(results: &[Value]) -> ProbeTally {
    let mut tally = ProbeTally::default();
    for probe in results {
        let complete = probe
            .get("result")
            .and_then(Value::as_array)
            .and_then(|replies| replies.first())
            .and_then(Value::as_object)
            .is_some_and(|reply| reply.len() == 6);
        tally.record(complete);
    }
    tally
}

/// TLS handshakes: passes when the probe reported no alert or error and the
/// certificate chain it received verifies for `host` at `at`.
pub fn tls(results: &[Value], host: &str, verifier: &CertVerifier, at: DateTime<Utc>) -> ProbeTally {
    let mut tally = ProbeTally::default();
    for probe in results {
        let clean = !truthy(probe.get("alert")) && !truthy(probe.get("err"));
        let chain: Vec<&str> = probe
            .get("cert")
            .and_then(Value::as_array)
            .map(|certs| certs.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let valid = clean
            && match verifier.verify_pem_chain(&chain, host, at) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!(host, probe = ?probe.get("prb_id"), error = %e, "certificate chain rejected");
                    false
                }
            };
        tally.record(valid);
    }
    tally
}

/// Probe connection events: disconnects fail, connects pass, other events
/// are not counted.
pub fn probe_status(results: &[Value]) -> ProbeTally {
    let mut tally = ProbeTally::default();
    for probe in results {
        match probe.get("event").and_then(Value::as_str) {
            Some("connect") => tally.record(true),
            Some("disconnect") => tally.record(false),
            _ => {}
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn root_dns_counts_every_result() {
        let r = results(json!([
            {"prb_id": 1, "result": {"ANCOUNT": 1}},
            {"prb_id": 2, "error": {"timeout": 5000}},
            {"prb_id": 3, "result": {"ANCOUNT": 1}}
        ]));
        assert_eq!(root_dns(&r), ProbeTally { failed: 1, total: 3 });
    }

    #[test]
    fn public_dns_ignores_unjudgeable_probes() {
        let r = results(json!([
            {"prb_id": 1, "result": {"ANCOUNT": 2}},
            {"prb_id": 2, "result": {"ANCOUNT": 0}},
            {"prb_id": 3, "error": {"socket": "connect failed"}},
            {"prb_id": 4, "result": {"rt": 12.5}},
            {"prb_id": 5}
        ]));
        assert_eq!(public_dns(&r), ProbeTally { failed: 2, total: 3 });
    }

    #[test]
    fn ntp_requires_complete_first_reply() {
        let full = json!({"final-ts": 1, "li": "no", "offset": 0.1, "origin-ts": 1, "receive-ts": 1, "rtt": 20});
        let r = results(json!([
            {"prb_id": 1, "result": [full]},
            {"prb_id": 2, "result": [{"x": "*"}]},
            {"prb_id": 3, "result": []}
        ]));
        assert_eq!(ntp(&r), ProbeTally { failed: 2, total: 3 });
    }

    const ROOT: &str = include_str!("../../tests/fixtures/tls/root.pem");
    const INTERMEDIATE: &str = include_str!("../../tests/fixtures/tls/intermediate.pem");
    const LEAF: &str = include_str!("../../tests/fixtures/tls/leaf.pem");
    const EXPIRED: &str = include_str!("../../tests/fixtures/tls/expired.pem");

    fn june_2026() -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn tls_verifies_each_probe_chain() {
        let verifier = CertVerifier::from_pem_roots(ROOT).unwrap();
        let r = results(json!([
            {"prb_id": 1, "cert": [LEAF, INTERMEDIATE]},
            {"prb_id": 2, "cert": [LEAF, INTERMEDIATE], "alert": {"level": 2}},
            {"prb_id": 3, "cert": [EXPIRED, INTERMEDIATE]},
            {"prb_id": 4, "err": "connect: timeout"},
            {"prb_id": 5, "cert": []},
            {"prb_id": 6, "cert": ["not a certificate at all"]}
        ]));
        assert_eq!(
            tls(&r, "www.example.com", &verifier, june_2026()),
            ProbeTally { failed: 5, total: 6 }
        );
    }

    #[test]
    fn tls_chain_for_another_host_fails() {
        let verifier = CertVerifier::from_pem_roots(ROOT).unwrap();
        let r = results(json!([{"prb_id": 1, "cert": [LEAF, INTERMEDIATE]}]));
        assert_eq!(
            tls(&r, "www.netflix.com", &verifier, june_2026()),
            ProbeTally { failed: 1, total: 1 }
        );
    }

    #[test]
    fn probe_status_counts_connection_events() {
        let r = results(json!([
            {"prb_id": 1, "event": "connect"},
            {"prb_id": 2, "event": "disconnect"},
            {"prb_id": 3, "event": "connect"},
            {"prb_id": 4, "event": "other"}
        ]));
        assert_eq!(probe_status(&r), ProbeTally { failed: 1, total: 3 });
    }
}
