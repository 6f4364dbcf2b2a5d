use std::ops::RangeInclusive;

use netgauge_core::{Finding, MetricKind};

use super::{messages, Evaluation};

/// Reserved, private, and otherwise invalid AS numbers.
const BOGON_ASN_RANGES: &[RangeInclusive<u32>] = &[
    0..=0,
    23456..=23456,
    64496..=64511,
    64512..=65534,
    65535..=65535,
    65536..=65551,
    65552..=131071,
    4_200_000_000..=4_294_967_294,
    4_294_967_295..=4_294_967_295,
];

/// A fixed set of disallowed AS number ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct AsnRangeTable {
    ranges: Vec<RangeInclusive<u32>>,
}

impl AsnRangeTable {
    pub fn new(ranges: Vec<RangeInclusive<u32>>) -> Self {
        Self { ranges }
    }

    /// Reserved and private ASNs that must never originate in global routing.
    pub fn bogon_asns() -> Self {
        Self::new(BOGON_ASN_RANGES.to_vec())
    }

    pub fn contains(&self, asn: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(&asn))
    }
}

impl Default for AsnRangeTable {
    fn default() -> Self {
        Self::bogon_asns()
    }
}

/// Flags entities originated by a disallowed identifier that at least
/// `visibility_floor` observers corroborate. Does not consult history.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipDetector {
    pub table: AsnRangeTable,
    pub visibility_floor: f64,
}

impl MembershipDetector {
    pub fn new(table: AsnRangeTable, visibility_floor: f64) -> Self {
        Self {
            table,
            visibility_floor,
        }
    }

    pub fn evaluate(&self, kind: MetricKind, key: &str, asn: u32, visibility: u64) -> Evaluation {
        if !self.table.contains(asn) || (visibility as f64) < self.visibility_floor {
            return Evaluation::none();
        }
        tracing::debug!(kind = %kind, key = %key, asn, visibility, "membership finding");
        Evaluation::finding(Finding::new(
            kind,
            key,
            messages::membership(kind, key, asn, visibility),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bogon_table_covers_reserved_ranges() {
        let table = AsnRangeTable::bogon_asns();
        for asn in [0, 23456, 64496, 64511, 64512, 65534, 65535, 65536, 131071, 4_200_000_000, u32::MAX] {
            assert!(table.contains(asn), "AS{asn} should be a bogon");
        }
        for asn in [1, 13335, 64495, 131072, 4_199_999_999] {
            assert!(!table.contains(asn), "AS{asn} should not be a bogon");
        }
    }
}
