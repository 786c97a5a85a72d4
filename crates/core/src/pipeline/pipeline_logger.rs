use std::collections::HashMap;
use std::time::Instant;

/// Observer for pipeline orchestration events.
///
/// Keeps the frame loop independent of any particular output mechanism:
/// the CLI logs through the `log` facade, tests plug in the null logger.
pub trait PipelineLogger: Send {
    /// One frame has been fully processed and presented.
    fn frame_done(&mut self, index: usize);

    /// Duration of a named pipeline stage for the current frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    fn info(&mut self, message: &str);

    /// End-of-run report. Default: nothing.
    fn summary(&self) {}
}

/// Discards everything.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn frame_done(&mut self, _index: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Accumulates per-stage timings and reports throughput at shutdown.
///
/// Per-frame progress lines are throttled to one every `throttle_frames`.
pub struct StdoutPipelineLogger {
    throttle_frames: usize,
    stage_totals: HashMap<String, (f64, usize)>,
    frames: usize,
    started: Instant,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            stage_totals: HashMap::new(),
            frames: 0,
            started: Instant::now(),
        }
    }

    fn summary_lines(&self) -> Vec<String> {
        let elapsed = self.started.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Session summary: {} frames in {elapsed:.1}s",
            self.frames
        )];

        let mut stages: Vec<_> = self.stage_totals.iter().collect();
        stages.sort_by(|a, b| a.0.cmp(b.0));
        for (stage, (total_ms, count)) in stages {
            let avg = if *count > 0 { total_ms / *count as f64 } else { 0.0 };
            lines.push(format!("  {stage:10} avg {avg:6.2}ms over {count} frames"));
        }
        if self.frames > 0 && elapsed > 0.0 {
            lines.push(format!("  throughput {:.1} fps", self.frames as f64 / elapsed));
        }
        lines
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(30)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn frame_done(&mut self, index: usize) {
        self.frames += 1;
        if index % self.throttle_frames == 0 {
            log::debug!("frame {index} presented");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let entry = self.stage_totals.entry(stage.to_string()).or_insert((0.0, 0));
        entry.0 += duration_ms;
        entry.1 += 1;
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        for line in self.summary_lines() {
            log::info!("{line}");
        }
    }
}
