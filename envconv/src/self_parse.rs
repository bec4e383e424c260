//! Self-parsing capability and dispatch precedence.
//!
//! A type that cannot be produced by a registered conversion function
//! may opt out of registry dispatch entirely by implementing
//! [`SelfParse`]: it receives no arguments and works on raw data it
//! already holds. [`convert_value`] encodes the fixed precedence between
//! the two mechanisms so loaders do not re-derive it.
//!
//! # Example
//!
//! ```rust
//! use envconv::{Conversion, ConvertResult, ParserRegistry, SelfParse, TypeKey, convert_value};
//!
//! struct CommaList {
//!     raw: String,
//!     items: Vec<String>,
//! }
//!
//! impl SelfParse for CommaList {
//!     fn parse_self(&mut self) -> ConvertResult<()> {
//!         self.items = self.raw.split(',').map(str::to_string).collect();
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ParserRegistry::builder().build();
//! let mut list = CommaList {
//!     raw: "a,b".to_string(),
//!     items: Vec::new(),
//! };
//!
//! let outcome = convert_value(Some(&mut list), &registry, TypeKey::of::<CommaList>(), "")?;
//! assert!(matches!(outcome, Conversion::SelfParsed));
//! assert_eq!(list.items, ["a", "b"]);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::convert::BoxedValue;
use crate::error::ConvertResult;
use crate::registry::{ParserRegistry, TypeKey};

/// Capability a type implements to parse itself, bypassing the registry.
///
/// The operation takes no raw text: the object already holds whatever
/// raw data it needs, supplied by the loader before the call. How a
/// failure arises is the implementor's business; it surfaces as a
/// [`FormatError`](crate::FormatError) like any other conversion.
pub trait SelfParse {
    /// Parses the raw data held by `self`, updating `self` in place.
    fn parse_self(&mut self) -> ConvertResult<()>;
}

/// Outcome of a dispatched conversion.
pub enum Conversion {
    /// The target parsed itself; there is no value to hand back.
    SelfParsed,
    /// The registry produced a value of the target type.
    Value(BoxedValue),
    /// No capability and no registry entry: the caller falls back.
    NoParser,
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfParsed => f.write_str("SelfParsed"),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::NoParser => f.write_str("NoParser"),
        }
    }
}

/// Converts one raw value with the fixed dispatch precedence:
/// self-parsing first, registry second.
///
/// `target` is the loader's capability-detection result for the field.
/// When it is present the registry is never consulted, not even on
/// failure. Without it the registered conversion for `key` runs, and a
/// missing entry is the normal negative [`Conversion::NoParser`].
pub fn convert_value(
    target: Option<&mut dyn SelfParse>,
    registry: &ParserRegistry,
    key: TypeKey,
    raw: &str,
) -> ConvertResult<Conversion> {
    if let Some(target) = target {
        tracing::trace!("Dispatching {} via self-parsing capability", key);
        target.parse_self()?;
        return Ok(Conversion::SelfParsed);
    }
    match registry.lookup(&key) {
        Some(f) => f(raw).map(Conversion::Value),
        None => Ok(Conversion::NoParser),
    }
}
