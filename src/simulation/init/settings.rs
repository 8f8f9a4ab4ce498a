use crate::domain::environment::Environment;

use super::perf_stats::TickStats;
use super::Engine;

pub(super) fn set_environment(engine: &mut Engine, environment: Environment) {
    engine.environment = environment;
}

pub(super) fn set_chunk_gating(engine: &mut Engine, enabled: bool) {
    engine.config.chunk_gating = enabled;
}

pub(super) fn enable_perf_metrics(engine: &mut Engine, enabled: bool) {
    engine.config.perf_metrics = enabled;
}

pub(super) fn last_stats(engine: &Engine) -> TickStats {
    engine.last_stats
}
