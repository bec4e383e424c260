//! Built-in parser sets.
//!
//! Two zero-argument producers return finalized registries for a loader
//! to merge into its master registry during setup:
//!
//! - [`extended_parsers`] carries the conversions this crate defines
//!   itself, starting with the delimited string map.
//! - [`default_parsers`] covers common scalar field types through their
//!   [`FromStr`](std::str::FromStr) impls, for loaders that send every
//!   field through the registry instead of hand-rolling a scalar
//!   fallback.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::kv::parse_kv_map;
use crate::registry::ParserRegistry;

/// Conversions for common scalar field types.
///
/// Covers `String`, `bool`, `i64`, `u64`, `f64`, [`IpAddr`],
/// [`SocketAddr`] and [`PathBuf`].
pub fn default_parsers() -> ParserRegistry {
    let mut builder = ParserRegistry::builder();
    builder.register_str::<String>();
    builder.register_str::<bool>();
    builder.register_str::<i64>();
    builder.register_str::<u64>();
    builder.register_str::<f64>();
    builder.register_str::<IpAddr>();
    builder.register_str::<SocketAddr>();
    builder.register_str::<PathBuf>();
    builder.build()
}

/// Conversions defined by this crate, beyond what a loader can derive
/// on its own.
///
/// Currently one entry: `HashMap<String, String>` parsed from the
/// `K1=V1,K2=V2` format by [`parse_kv_map`].
pub fn extended_parsers() -> ParserRegistry {
    let mut builder = ParserRegistry::builder();
    builder.register_fn(parse_kv_map);
    builder.build()
}
