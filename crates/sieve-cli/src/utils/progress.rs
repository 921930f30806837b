use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stoichsieve::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Bridges the core [`ProgressReporter`](stoichsieve::engine::progress::ProgressReporter)
/// events onto an indicatif bar: phases render as a spinner, candidate
/// sweeps as a determinate bar sized by the raw candidate count.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.disable_steady_tick();
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb.reset();
                    pb.set_length(0);
                    pb.set_style(Self::spinner_style());
                    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb.set_message(name.to_string());
                }
                Progress::PhaseFinish => {
                    pb.disable_steady_tick();
                    pb.finish_with_message("✓ Done");
                }
                Progress::ScreenStart { candidates } => {
                    pb.disable_steady_tick();
                    pb.reset();
                    pb.set_length(candidates);
                    pb.set_position(0);
                    pb.set_style(Self::bar_style());
                    pb.set_message("Screening");
                }
                Progress::CandidateScreened => {
                    pb.inc(1);
                }
                Progress::ScreenFinish => {
                    if pb.position() < pb.length().unwrap_or(0) {
                        pb.set_position(pb.length().unwrap_or(0));
                    }
                    pb.finish();
                }
                Progress::Message(msg) => {
                    if !pb.is_finished() {
                        pb.println(format!("  {}", msg));
                    } else {
                        pb.set_message(msg);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    write!(w, "{:.1}s", state.eta().as_secs_f64()).unwrap()
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_a_screening_sweep() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        callback(Progress::PhaseStart {
            name: "Binary Screening",
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Binary Screening");
            assert!(!pb.is_finished());
        }

        callback(Progress::ScreenStart { candidates: 9 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(9));
            assert_eq!(pb.position(), 0);
        }

        callback(Progress::CandidateScreened);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 1);
        }

        callback(Progress::ScreenFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 9);
        }

        callback(Progress::PhaseFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "✓ Done");
        }
    }

    #[test]
    fn callback_is_safe_to_call_from_another_thread() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        std::thread::spawn(move || {
            callback(Progress::PhaseStart { name: "Threaded" });
            callback(Progress::CandidateScreened);
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Done");
    }
}
