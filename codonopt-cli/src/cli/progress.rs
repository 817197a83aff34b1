use codonopt_core::{ProgressObserver, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos:>7}/{len:7} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━─"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Drives a progress bar from pipeline events.
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    pub fn new(targets: usize) -> Self {
        Self {
            bar: create_progress_bar(targets as u64, "Building usage table"),
        }
    }
}

impl ProgressObserver for BarObserver {
    fn on_progress(&self, stage: Stage, detail: &str) {
        match stage {
            Stage::BuildTable => self.bar.set_message(format!("Counting codons in {detail}")),
            Stage::Optimize => {
                self.bar.set_message("Optimizing");
                self.bar.inc(1);
            }
            Stage::Finish => self.bar.finish_and_clear(),
        }
    }
}

impl Drop for BarObserver {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
