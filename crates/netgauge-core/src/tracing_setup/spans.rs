//! Span names. Each constant names one span created via `tracing::info_span!`.

pub const CYCLE: &str = "netgauge.cycle";
pub const COLLECT: &str = "netgauge.collect";
pub const EVALUATE: &str = "netgauge.evaluate";
pub const PERSIST: &str = "netgauge.persist";
