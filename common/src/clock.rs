use chrono::NaiveDate;

/// Source of "today" for date arithmetic on bookings.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
