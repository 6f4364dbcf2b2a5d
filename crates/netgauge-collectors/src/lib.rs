//! # netgauge-collectors
//!
//! Collectors that fetch external sources and normalise them into samples.
//! Every collector splits fetching from parsing; the parse functions are
//! pure and tested without network access.

pub mod atlas;
pub mod aws;
pub mod http;
pub mod incidents;
pub mod registry;
pub mod routing;
pub mod rpki;

pub use atlas::{AtlasCheck, AtlasCollector};
pub use aws::AwsCollector;
pub use http::HttpFetcher;
pub use incidents::{IncidentCollector, IncidentFeed};
pub use registry::build_collectors;
pub use routing::RoutingTableCollector;
pub use rpki::RpkiCollector;
