//! # netgauge-engine
//!
//! Turns raw per-source samples into weighted findings, folds them into a
//! verdict, and drives the COLLECT → EVALUATE → AGGREGATE → PERSIST → WAIT
//! loop.
//!
//! - [`HistoryStore`]: bounded newest-first windows per (metric kind, entity).
//! - [`Detector`]: one comparison strategy per metric kind, chosen by [`DetectorRegistry`].
//! - [`ScoreAggregator`]: weighted score, status label, per-cycle weight escalation.
//! - [`EvaluationEngine`]: one evaluation pass over a cycle's samples.
//! - [`CycleScheduler`]: the unbounded cycle loop over an injectable [`Clock`](netgauge_core::traits::Clock).

pub mod aggregation;
pub mod detectors;
pub mod engine;
pub mod history;
pub mod scheduler;

pub use aggregation::{EffectiveWeights, EscalationClass, ScoreAggregator, StatusTable};
pub use detectors::{Detector, DetectorContext, DetectorRegistry, Evaluation};
pub use engine::EvaluationEngine;
pub use history::{HistoryStore, HistoryWindow};
pub use scheduler::{CycleReport, CycleScheduler, ManualClock, SchedulerConfig, SystemClock};
