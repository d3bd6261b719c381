//! Domain logic shared by every StayHub crate.
//!
//! Pure and synchronous by design: no I/O, no async, no framework types.
//! The persistence and API layers depend on this crate, never the reverse.

pub mod booking;
pub mod error;
pub mod pagination;
pub mod types;
