use std::time::{Duration, Instant};

use tracing::info;

/// Observability capability handed to the pipeline. Stage timing goes through
/// this seam instead of an ambient logger so stages stay independently
/// testable.
pub trait PipelineObserver {
    fn stage_completed(&self, stage: &str, elapsed: Duration);
}

/// Default observer: logs stage durations through `tracing`.
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn stage_completed(&self, stage: &str, elapsed: Duration) {
        info!("{stage} ran in {elapsed:?}");
    }
}

/// Run a stage and report its duration to the observer.
pub fn timed<T>(observer: &dyn PipelineObserver, stage: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    observer.stage_completed(stage, start.elapsed());
    result
}
