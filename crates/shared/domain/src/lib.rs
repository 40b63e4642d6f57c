//! # Domain Models
//!
//! Pure settings records and well-known paths with a single dependency (`serde`).
//! Keep it lean: no I/O or logic, just data and defaults.

pub mod constants;
pub mod settings;
