//! # Hospital Records
//!
//! Passive data held by the registry.
//!
//! * [`person::Person`]: fields shared by every person on record.
//! * [`patient::Patient`] and [`doctor::Doctor`]: a `Person` plus one
//!   type-specific field each.
//! * [`appointment::Appointment`]: links a patient and a doctor **by id** on a date.
//!
//! Nothing here validates field values; input constraints live in the front end.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod person;

/// Human-readable one-line description of a record.
pub trait Summary {
    fn summary(&self) -> String;
}
