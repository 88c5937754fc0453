use serde::Serialize;
use std::time::Instant;

/// Pipeline stage a timing entry is recorded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Gradient,
    Edges,
    Regions,
    Reconcile,
    Features,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Wall time of one extractor run, stage by stage in execution order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `f`, record its wall time under `stage` and add it to the total.
    pub fn measure<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn record(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
        self.total_ms += elapsed_ms;
    }

    /// Put the stages of `earlier` in front of this breakdown's stages.
    pub fn prepend(&mut self, earlier: TimingBreakdown) {
        self.total_ms += earlier.total_ms;
        self.stages.splice(0..0, earlier.stages);
    }

    pub fn elapsed_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_value_and_accumulates_total() {
        let mut timings = TimingBreakdown::default();
        let n = timings.measure(Stage::Edges, || 41 + 1);
        assert_eq!(n, 42);
        timings.record(Stage::Regions, 2.5);
        assert_eq!(timings.stages.len(), 2);
        assert_eq!(timings.elapsed_ms(Stage::Regions), Some(2.5));
        assert_eq!(timings.elapsed_ms(Stage::Features), None);
        assert!(timings.total_ms >= 2.5);
    }

    #[test]
    fn prepend_keeps_execution_order() {
        let mut earlier = TimingBreakdown::default();
        earlier.record(Stage::Gradient, 1.0);
        let mut later = TimingBreakdown::default();
        later.record(Stage::Edges, 0.5);
        later.prepend(earlier);
        let order: Vec<Stage> = later.stages.iter().map(|t| t.stage).collect();
        assert_eq!(order, vec![Stage::Gradient, Stage::Edges]);
        assert_eq!(later.total_ms, 1.5);

        let json = serde_json::to_string(&later).unwrap();
        assert!(json.starts_with(r#"{"totalMs":1.5,"stages":[{"stage":"gradient""#));
    }
}
