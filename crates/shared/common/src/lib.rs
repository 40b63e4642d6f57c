//! # Common
//!
//! Synchronous file I/O helpers shared by every crate in the workspace:
//!
//! * YAML and JSON configuration documents ([`read_yaml`], [`load_json`], [`save_json`],
//!   [`to_json_pretty`]),
//! * `postcard` binary artifacts ([`save_bin`], [`load_bin`]),
//! * directory creation and human-readable file sizes ([`create_directories`], [`get_size`]),
//! * base64 image payloads ([`encode_image`], [`decode_image`]).
//!
//! Every operation either succeeds completely or returns a [`CommonError`]; nothing here
//! retries or falls back to defaults. Successful operations emit `tracing` events, which are
//! only visible once the application has installed a logger.

mod binary;
mod document;
mod error;
mod files;
mod image;
mod json;
mod yaml;

pub use crate::binary::{load_bin, save_bin};
pub use crate::document::ConfigDocument;
pub use crate::error::{CommonError, CommonErrorExt};
pub use crate::files::{create_directories, get_size};
pub use crate::image::{decode_image, encode_image};
pub use crate::json::{load_json, save_json, to_json_pretty};
pub use crate::yaml::{parse_yaml, read_yaml};
