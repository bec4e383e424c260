//! # Typed Value Conversion for Env-Style Loaders
//!
//! The conversion core a configuration loader calls once per field:
//! given the raw text of one variable and a known target type, produce
//! a typed value or a precise error. The loader owns everything around
//! it, walking structs, resolving variable names and prefixes, handling
//! required/optional/default semantics; this crate owns turning one
//! string into one value.
//!
//! ## Features
//!
//! - **Type-keyed dispatch**: a [`ParserRegistry`] maps a [`TypeKey`]
//!   to the conversion function producing that type
//! - **Build/read split**: registries are assembled through
//!   [`RegistryBuilder`] and immutable after [`RegistryBuilder::build`],
//!   safe to share across concurrently executing loaders
//! - **Delimited maps**: [`parse_kv_map`] turns `K1=V1,K2=V2` text into
//!   a `HashMap<String, String>`
//! - **Self-parsing escape hatch**: types implementing [`SelfParse`]
//!   bypass the registry entirely, with the precedence rule packaged as
//!   [`convert_value`]
//! - **Ready-made sets**: [`default_parsers`] for common scalars,
//!   [`extended_parsers`] for this crate's own conversions
//!
//! ## Usage
//!
//! ```rust
//! use envconv::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Loader setup: one master registry merged from producer sets.
//! let mut builder = ParserRegistry::builder();
//! builder.merge(default_parsers());
//! builder.merge(extended_parsers());
//! let registry = builder.build();
//!
//! // Per-field conversion for a known target type.
//! let port: u64 = registry.convert("8080").unwrap()?;
//! assert_eq!(port, 8080);
//!
//! // Delimited maps come from the extended set.
//! let labels: HashMap<String, String> = registry.convert("zone=a,rack=12").unwrap()?;
//! assert_eq!(labels["rack"], "12");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch Model
//!
//! For each field the loader first checks the self-parsing capability,
//! then the registry, in that order:
//!
//! 1. The field's type implements [`SelfParse`]: the object parses raw
//!    data it already holds and the registry is never consulted
//! 2. The registry has an entry for the type: the registered function
//!    runs on the raw text
//! 3. Neither: a normal negative, the loader falls back to strategies
//!    it owns
//!
//! ## Error Handling
//!
//! Every conversion returns `Result<_, FormatError>` and fails whole:
//! the map parser never hands back a partial mapping. A missing registry
//! entry is not an error, [`ParserRegistry::lookup`] returns `None` and
//! [`convert_value`] returns [`Conversion::NoParser`].
//!
//! ## Thread Safety
//!
//! - **RegistryBuilder**: NOT thread-safe - build sequentially during setup
//! - **ParserRegistry**: thread-safe once built - immutable, `Send + Sync`,
//!   cheap to clone
//! - **Conversion functions**: stateless and `Send + Sync` - concurrent
//!   invocation with different inputs is always safe

#![warn(clippy::all)]

pub mod builtins;
pub mod convert;
pub mod error;
pub mod kv;
pub mod prelude;
pub mod registry;
pub mod self_parse;

pub use builtins::{default_parsers, extended_parsers};
pub use convert::{BoxedValue, ConvertFn, erase, json_conv, str_conv, toml_conv};
pub use error::{ConvertResult, FormatError};
pub use kv::parse_kv_map;
pub use registry::{ParserRegistry, RegistryBuilder, TypeKey};
pub use self_parse::{Conversion, SelfParse, convert_value};
