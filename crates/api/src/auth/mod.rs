//! Credential issuing and verification.

pub mod jwt;
