//! # sassy
//!
//! Converts indentation-nested style sheets into brace-delimited CSS.
//!
//! The [convert] module holds the conversion itself, a pure function over text. The
//! [driver] rewrites a directory of style sheets in place, and [settings] layers user settings
//! over the embedded defaults.

pub mod convert;
pub mod driver;
pub mod error;
pub mod settings;

pub use convert::{convert_sass_to_css, convert_sass_to_css_with, TransformOptions};
pub use error::{Error, Result};
