//! Structured log events for the cycle lifecycle.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a cycle.
pub fn cycle_started(cycle: u64, due_sources: usize) {
    tracing::info!(
        event = "cycle_started",
        cycle = cycle,
        due_sources = due_sources,
        "cycle started"
    );
}

/// Log a collector failure. Non-fatal: the source contributes no samples.
pub fn source_failed(source: &str, code: &str, error: &str) {
    tracing::warn!(
        event = "source_failed",
        source = %source,
        code = %code,
        error = %error,
        "collection failed, source skipped this cycle"
    );
}

/// Log one measurement that could not be fetched. The rest of the source
/// still reports.
pub fn measurement_skipped(source: &str, target: &str, error: &str) {
    tracing::warn!(
        event = "measurement_skipped",
        source = %source,
        target = %target,
        error = %error,
        "measurement skipped"
    );
}

/// Log a successful collection.
pub fn source_collected(source: &str, samples: usize) {
    tracing::debug!(
        event = "source_collected",
        source = %source,
        samples = samples,
        "source collected"
    );
}

/// Log a transient weight escalation.
pub fn weight_escalated(kind: &str, class: &str, effective_weight: f64) {
    tracing::info!(
        event = "weight_escalated",
        kind = %kind,
        class = %class,
        effective_weight = effective_weight,
        "metric weight escalated for this cycle"
    );
}

/// Log a sample whose value does not fit its metric's strategy.
pub fn sample_mismatch(kind: &str, key: &str, value_type: &str) {
    tracing::warn!(
        event = "sample_mismatch",
        kind = %kind,
        key = %key,
        value_type = %value_type,
        "sample value does not match detector strategy, skipped"
    );
}

/// Log a published verdict.
pub fn verdict_published(status: &str, weighted_score: f64, unweighted_score: u64) {
    tracing::info!(
        event = "verdict_published",
        status = %status,
        weighted_score = weighted_score,
        unweighted_score = unweighted_score,
        "verdict published"
    );
}

/// Log a persistence failure. The loop continues with the next cycle.
pub fn persist_failed(error: &str) {
    tracing::error!(
        event = "persist_failed",
        error = %error,
        "failed to persist verdict"
    );
}

/// Log the end of a cycle with the upcoming wait.
pub fn cycle_completed(cycle: u64, findings: usize, duration_secs: u64, wait_secs: u64) {
    tracing::info!(
        event = "cycle_completed",
        cycle = cycle,
        findings = findings,
        duration_secs = duration_secs,
        wait_secs = wait_secs,
        "cycle completed"
    );
}
