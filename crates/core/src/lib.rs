//! Domain types shared across the rollcall crates.
//!
//! Holds the attendance status vocabulary, calendar-date handling, and the
//! error taxonomy. This crate performs no I/O.

pub mod attendance;
pub mod error;
pub mod types;
