use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Counting codons in the reference corpus.
    BuildTable,
    /// One target finished; `detail` is its record id.
    Optimize,
    /// The batch is done; `detail` is the summary line.
    Finish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::BuildTable => "build-table",
            Stage::Optimize => "optimize",
            Stage::Finish => "finish",
        };
        f.write_str(name)
    }
}

/// Receives progress from a running [`Pipeline`](super::Pipeline). Called
/// from worker threads.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, stage: Stage, detail: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    #[inline]
    fn on_progress(&self, _stage: Stage, _detail: &str) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(Stage, &str) + Sync,
{
    fn on_progress(&self, stage: Stage, detail: &str) {
        self(stage, detail)
    }
}
