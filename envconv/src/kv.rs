//! Delimited key/value map parsing.

use std::collections::HashMap;

use crate::error::{ConvertResult, FormatError};

/// Parses a `K1=V1,K2=V2` list into a string map.
///
/// Entries are separated by `,`, key and value by `=`. There is no
/// quoting, no escaping and no whitespace trimming; keys and values may
/// be empty. An entry must split into exactly one key and one value on
/// `=`, anything else fails the whole parse and the entries before it
/// are discarded. A key given twice keeps its last value. The empty
/// string is one malformed entry, not an empty map.
///
/// # Errors
///
/// [`FormatError::MalformedPair`] carrying the offending entry verbatim.
///
/// # Example
///
/// ```rust
/// use envconv::parse_kv_map;
///
/// # fn main() -> Result<(), envconv::FormatError> {
/// let labels = parse_kv_map("zone=a,rack=12")?;
/// assert_eq!(labels["zone"], "a");
/// assert_eq!(labels["rack"], "12");
/// # Ok(())
/// # }
/// ```
pub fn parse_kv_map(raw: &str) -> ConvertResult<HashMap<String, String>> {
    let mut mapping = HashMap::new();
    for entry in raw.split(',') {
        let mut tokens = entry.split('=');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(key), Some(value), None) => {
                mapping.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(FormatError::MalformedPair {
                    token: entry.to_string(),
                });
            }
        }
    }
    Ok(mapping)
}
