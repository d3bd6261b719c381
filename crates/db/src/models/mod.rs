//! Row models and input DTOs, one module per entity.
//!
//! Row structs derive `FromRow` + `Serialize` and mirror table columns
//! exactly. Input DTOs derive `Deserialize` + `Validate`; validation fails
//! closed with a field-level violation map, never partial acceptance.

pub mod auth_token;
pub mod booking;
pub mod message;
pub mod property;
pub mod review;
pub mod search;
pub mod user;
