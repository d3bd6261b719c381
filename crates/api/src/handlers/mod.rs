//! Request handlers, one module per entity.
//!
//! Every handler follows the same shape: validate, authorize, query,
//! respond, and publish a realtime event when the entity changed.

pub mod auth;
pub mod booking;
pub mod message;
pub mod property;
pub mod review;
pub mod user;
