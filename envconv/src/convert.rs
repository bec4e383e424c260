//! Conversion function shape and constructors.
//!
//! A conversion function takes the raw text of one variable and produces
//! a type-erased value for a known target type, or a [`FormatError`].
//! Loaders keep them in a [`ParserRegistry`](crate::ParserRegistry) and
//! invoke one per matching field.

use std::any::Any;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::FormatError;

// ─── Function shape ─────────────────────────────────────────────────

/// Type-erased success value of a conversion function.
///
/// Callers downcast to the target type named by the registry key the
/// function was registered under.
pub type BoxedValue = Box<dyn Any>;

/// A conversion function: raw text in, typed value or error out.
///
/// Pure and stateless. `Send + Sync` so one registry can serve
/// concurrently executing loaders; `Arc` so cloning a registry shares
/// the functions instead of duplicating them.
pub type ConvertFn = Arc<dyn Fn(&str) -> Result<BoxedValue, FormatError> + Send + Sync>;

// ─── Constructors ───────────────────────────────────────────────────

/// Wraps a typed conversion closure into the erased [`ConvertFn`] shape.
///
/// Boxing happens here and only here, so a function built through this
/// constructor always produces a value of the type it was declared with.
///
/// # Example
///
/// ```rust
/// use envconv::convert::erase;
///
/// # fn main() -> Result<(), envconv::FormatError> {
/// let f = erase(|raw: &str| Ok(raw.len()));
/// let boxed = f("four")?;
/// assert_eq!(*boxed.downcast::<usize>().unwrap(), 4);
/// # Ok(())
/// # }
/// ```
pub fn erase<T, F>(f: F) -> ConvertFn
where
    T: Any,
    F: Fn(&str) -> Result<T, FormatError> + Send + Sync + 'static,
{
    Arc::new(move |raw| f(raw).map(|value| Box::new(value) as BoxedValue))
}

/// Conversion function for any type parseable from a plain string.
///
/// Failures carry the target type name, the raw text and the message of
/// the underlying [`FromStr`] error.
pub fn str_conv<T>() -> ConvertFn
where
    T: FromStr + Any,
    T::Err: std::fmt::Display,
{
    erase(|raw: &str| {
        raw.parse::<T>().map_err(|e| FormatError::InvalidValue {
            target: std::any::type_name::<T>(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Conversion function for a value carried as an inline JSON document,
/// e.g. `LIMITS={"min":0,"max":100}`.
pub fn json_conv<T>() -> ConvertFn
where
    T: DeserializeOwned + Any,
{
    erase(|raw: &str| {
        serde_json::from_str::<T>(raw).map_err(|e| FormatError::InvalidValue {
            target: std::any::type_name::<T>(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Conversion function for a value carried as an inline TOML document.
pub fn toml_conv<T>() -> ConvertFn
where
    T: DeserializeOwned + Any,
{
    erase(|raw: &str| {
        toml::from_str::<T>(raw).map_err(|e| FormatError::InvalidValue {
            target: std::any::type_name::<T>(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    })
}
