//! Kernel utilities shared across the binaries.
//! Keep this crate lightweight; it owns settings loading and re-exports the domain records.
//!
//! ## Settings loading
//! ```rust
//! use cnn_kernel::config::load_config;
//! use cnn_kernel::domain::settings::AppSettings;
//!
//! let settings: AppSettings = load_config(None::<&str>).unwrap();
//! assert_eq!(settings.logging.file_name, "running_logs.log");
//! ```
pub mod config;

pub use cnn_domain as domain;
