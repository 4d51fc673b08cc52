//! # Carebook Core
//!
//! The in-memory registry and everything that acts on it.
//!
//! * [`registry`]: ordered patient, doctor and appointment collections.
//! * [`ids`]: per-specialty doctor id sequences.
//! * [`booking`]: appointment date arithmetic.
//! * [`hospital`]: the application service front ends drive.
//! * [`export`]: pushes a registry through a [`RecordStore`](carebook_common::store::RecordStore).
//!
//! Adapters for the ports defined in `carebook-common`:
//! * [`sqlite::SqliteStore`], [`session::JsonSessionRepo`], [`clock::LocalClock`].

pub mod booking;
pub mod clock;
pub mod export;
pub mod hospital;
pub mod ids;
pub mod registry;
pub mod session;
pub mod sqlite;
