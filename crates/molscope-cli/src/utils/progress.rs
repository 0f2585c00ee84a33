use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use molscope::engine::progress::{Progress, ProgressCallback};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK: Duration = Duration::from_millis(80);
const DONE_MESSAGE: &str = "✓ Done";

fn phase_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn steps_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("##-")
}

/// Energy readout shown next to the step bar, with the change since step 0.
fn energy_message(total: f64, baseline: Option<f64>) -> String {
    let mut message = format!("E = {:.3} kcal/mol", total);
    if let Some(start) = baseline {
        let _ = write!(message, " (ΔE {:+.3})", total - start);
    }
    message
}

/// Terminal view of a minimization run: one bar on stderr that switches between a
/// phase spinner and a step counter.
#[derive(Clone)]
pub struct MinimizationProgress {
    bar: ProgressBar,
    baseline: Arc<Mutex<Option<f64>>>,
}

impl MinimizationProgress {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr()))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(phase_style());
        bar.finish_and_clear();
        Self {
            bar,
            baseline: Arc::new(Mutex::new(None)),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let view = self.clone();
        Box::new(move |event| view.apply(event))
    }

    fn apply(&self, event: Progress) {
        let bar = &self.bar;
        match event {
            Progress::PhaseStart { name } => {
                bar.reset();
                bar.set_length(0);
                bar.set_style(phase_style());
                bar.set_message(name);
                bar.enable_steady_tick(SPINNER_TICK);
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                bar.finish_with_message(DONE_MESSAGE);
            }
            Progress::TaskStart { total_steps } => {
                bar.disable_steady_tick();
                bar.reset();
                bar.set_style(steps_style());
                bar.set_length(total_steps);
            }
            Progress::TaskIncrement { steps } => bar.inc(steps),
            Progress::TaskFinish => {
                if let Some(length) = bar.length() {
                    bar.set_position(length);
                }
                bar.finish();
            }
            Progress::Energy { step, energy } => {
                let total = energy.total();
                let Ok(mut baseline) = self.baseline.lock() else {
                    warn!("Energy baseline lock was poisoned; skipping energy readout.");
                    return;
                };
                if step == 0 {
                    *baseline = Some(total);
                    bar.set_message(energy_message(total, None));
                } else {
                    bar.set_message(energy_message(total, *baseline));
                }
            }
            Progress::Message(text) => {
                if bar.is_finished() {
                    bar.set_message(text);
                } else {
                    bar.println(format!("  {}", text));
                }
            }
        }
    }
}

impl Default for MinimizationProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molscope::core::forcefield::term::EnergyBreakdown;
    use std::thread;

    fn hidden() -> MinimizationProgress {
        MinimizationProgress::with_bar(ProgressBar::hidden())
    }

    #[test]
    fn starts_cleared() {
        let view = hidden();
        assert_eq!(view.bar.length(), Some(0));
        assert!(view.bar.is_finished());
    }

    #[test]
    fn energy_message_reports_change_from_baseline() {
        assert_eq!(energy_message(1.25, None), "E = 1.250 kcal/mol");
        assert_eq!(
            energy_message(0.75, Some(1.25)),
            "E = 0.750 kcal/mol (ΔE -0.500)"
        );
    }

    #[test]
    fn tracks_a_chunked_minimization() {
        let view = hidden();
        let callback = view.callback();

        callback(Progress::PhaseStart {
            name: "Preparation",
        });
        callback(Progress::Energy {
            step: 0,
            energy: EnergyBreakdown::new(2.0, -0.5),
        });
        assert_eq!(view.bar.message(), "E = 1.500 kcal/mol");
        assert!(!view.bar.is_finished());
        callback(Progress::PhaseFinish);

        callback(Progress::PhaseStart {
            name: "Minimization",
        });
        assert_eq!(view.bar.message(), "Minimization");
        callback(Progress::TaskStart { total_steps: 120 });
        callback(Progress::TaskIncrement { steps: 50 });
        callback(Progress::Energy {
            step: 50,
            energy: EnergyBreakdown::new(1.5, -0.25),
        });
        assert_eq!(view.bar.length(), Some(120));
        assert_eq!(view.bar.position(), 50);
        assert_eq!(view.bar.message(), "E = 1.250 kcal/mol (ΔE -0.250)");

        callback(Progress::TaskFinish);
        assert!(view.bar.is_finished());
        assert_eq!(view.bar.position(), 120);

        callback(Progress::PhaseFinish);
        assert_eq!(view.bar.message(), DONE_MESSAGE);
    }

    #[test]
    fn message_after_finish_replaces_the_label() {
        let view = hidden();
        let callback = view.callback();
        callback(Progress::Message("Loaded parameter overrides".to_string()));
        assert_eq!(view.bar.message(), "Loaded parameter overrides");
    }

    #[test]
    fn callback_can_run_on_another_thread() {
        let view = hidden();
        let callback = view.callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Thread Test",
            });
            callback(Progress::TaskIncrement { steps: 1 });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        assert!(view.bar.is_finished());
        assert_eq!(view.bar.message(), DONE_MESSAGE);
    }
}
