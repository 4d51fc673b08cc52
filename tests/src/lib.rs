//! End-to-end scenarios across the registry, the hospital service and the
//! SQLite record store.

mod booking;
mod export;
mod utils;
