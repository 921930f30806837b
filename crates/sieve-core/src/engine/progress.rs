/// Events emitted while a screening call runs.
///
/// `ScreenStart` carries the raw candidate count before deduplication, so an
/// observer sees the true size of the sweep even when reduction later
/// collapses candidates.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    ScreenStart { candidates: u64 },
    CandidateScreened,
    ScreenFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional observer callback.
///
/// A reporter without a callback is free: every event is dropped without
/// allocation, so library code reports unconditionally.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
