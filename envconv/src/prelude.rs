//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use envconv::prelude::*;` and get the
//! most important items without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use envconv::prelude::*;
//! ```

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{ConvertResult, FormatError};

// ─── Conversion functions ───────────────────────────────────────────
pub use crate::convert::{BoxedValue, ConvertFn, erase, json_conv, str_conv, toml_conv};

// ─── Registry ───────────────────────────────────────────────────────
pub use crate::registry::{ParserRegistry, RegistryBuilder, TypeKey};

// ─── Map parsing ────────────────────────────────────────────────────
pub use crate::kv::parse_kv_map;

// ─── Built-in parser sets ───────────────────────────────────────────
pub use crate::builtins::{default_parsers, extended_parsers};

// ─── Dispatch ───────────────────────────────────────────────────────
pub use crate::self_parse::{Conversion, SelfParse, convert_value};
