//! Score aggregation: per-cycle effective weights, status tiers, verdicts.

mod aggregator;
mod status;
mod weights;

pub use aggregator::ScoreAggregator;
pub use status::StatusTable;
pub use weights::{EffectiveWeights, EscalationClass, ESCALATION_STEP};
