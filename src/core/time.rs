use chrono::{DateTime, Days, NaiveDate, Utc};

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pins the clock to midday on `date`.
    pub fn on(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or_else(Utc::now);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Calendar days from `today` to `target`; negative when `target` is in the past.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Last day of a window of `days` starting at `today`, inclusive.
pub fn window_end(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `date` lies in `[today, today + days]`.
pub fn within_window(date: NaiveDate, today: NaiveDate, days: u32) -> bool {
    date >= today && date <= window_end(today, days)
}
