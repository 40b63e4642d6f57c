//! Facade crate for the classifier workspace.
//! Re-exports the I/O layer, domain records, settings loader and logger, and adds the glue that
//! turns settings into a running [`Logger`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load [`domain::settings::AppSettings`] with [`kernel::config::load_config`].
//! - Build the logger with [`logging::build_logger`] and install it once at startup.
//! - Call the [`common`] helpers; they report through `tracing`.

pub use cnn_common as common;
pub use cnn_domain as domain;
pub use cnn_kernel as kernel;
pub use cnn_logger as logger;
pub use cnn_logger::Logger;

pub mod logging;
pub mod package;
