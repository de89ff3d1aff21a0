#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use mfuko::{
    data::{DataProvider, SampleDataProvider},
    domain::FinanceSnapshot,
    format::DisplayFormatter,
    presenter::Presenter,
    services::FixedClock,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn setup_test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn sample() -> FinanceSnapshot {
    SampleDataProvider.snapshot().expect("bundled sample parses")
}

/// Mid-morning on the day the textbooks were bought.
pub fn fixed_clock() -> FixedClock {
    FixedClock::at(date(2025, 3, 20), 9).expect("valid clock")
}

pub fn presenter() -> Presenter<FixedClock> {
    Presenter::new(DisplayFormatter::default(), fixed_clock())
}
