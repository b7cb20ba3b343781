use chrono::{DateTime, Utc};

/// Closed time interval used for reservation periods and availability queries.
///
/// Both endpoints are inclusive: an interval ending at instant `t` still
/// occupies `t`, so a second interval starting at `t` overlaps it. Callers
/// that want back-to-back bookings must leave a gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Creates an interval without validating its ordering. Validation of
    /// `start <= end` happens at the service boundary so the error can carry
    /// a user-facing message.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether the interval is well formed, i.e. `start <= end`. An interval
    /// with equal endpoints is a valid single-instant interval.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Inclusive overlap test: two intervals conflict when each starts no
    /// later than the other ends. Touching endpoints count as overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Whether the given instant falls within the interval, endpoints included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
