//! Display treatment for progress bars.

use std::fmt;

use serde::Serialize;

const WARNING_THRESHOLD: f64 = 0.7;
const CRITICAL_THRESHOLD: f64 = 0.9;

/// Color band a progress bar is drawn in.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTone {
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for ProgressTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProgressTone::Normal => "normal",
            ProgressTone::Warning => "warning",
            ProgressTone::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Clamps a ratio into `[0, 1]` for drawing. NaN draws as empty.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Picks the bar tone. Thresholds apply only when `warning` is enabled and compare the clamped value.
pub fn progress_tone(progress: f64, warning: bool) -> ProgressTone {
    if !warning {
        return ProgressTone::Normal;
    }
    let clamped = clamp_progress(progress);
    if clamped > CRITICAL_THRESHOLD {
        ProgressTone::Critical
    } else if clamped > WARNING_THRESHOLD {
        ProgressTone::Warning
    } else {
        ProgressTone::Normal
    }
}
