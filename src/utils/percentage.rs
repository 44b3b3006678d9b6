use std::{fmt::Display, ops::Deref};

/// Whole-number percentage, as shown on progress bars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    /// `part` out of `whole`, rounded to the nearest integer. An empty whole is 0%.
    pub fn of_count(part: usize, whole: usize) -> Percentage {
        if whole == 0 {
            return Percentage(0.);
        }
        Percentage((part as f64 / whole as f64 * 100.).round())
    }

    pub fn capped(self) -> Percentage {
        Percentage(self.0.min(100.))
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
