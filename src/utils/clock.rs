use chrono::{DateTime, Local, NaiveDate};

/// Represents an entity responsible for providing dates across application. This allows tests
/// to pin "today" to a fixed calendar day.
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;

    /// The calendar day the user is currently living in. Day boundaries follow the local time
    /// zone, not UTC.
    fn today(&self) -> NaiveDate {
        self.time().date_naive()
    }
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use test_clock::FixedClock;
