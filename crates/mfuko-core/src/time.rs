use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to `hour:00` UTC on `date`.
    pub fn at(date: NaiveDate, hour: u32) -> Option<Self> {
        let naive = date.and_hms_opt(hour, 0, 0)?;
        Some(Self(Utc.from_utc_datetime(&naive)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Whole days from `now` until midnight UTC of `target`, rounding partial days up.
///
/// A target earlier today yields `0`; any earlier date is negative.
pub fn days_until(target: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target_start = Utc.from_utc_datetime(&target.and_time(chrono::NaiveTime::MIN));
    let millis = (target_start - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}
