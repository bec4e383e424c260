//! Type-keyed parser registry.
//!
//! Maps a [`TypeKey`] (one per target data type) to the [`ConvertFn`]
//! that produces values of that type. The registry is assembled through
//! [`RegistryBuilder`] while a loader sets itself up, then finalized
//! into the read-only [`ParserRegistry`] that conversion goes through.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::convert::{ConvertFn, erase, str_conv};
use crate::error::FormatError;

// ─── TypeKey ────────────────────────────────────────────────────────

/// Stable identifier for a conversion target type.
///
/// Equality and hashing consider only the underlying [`TypeId`]: two
/// keys are equal exactly when they describe the same type. The type
/// name is captured alongside for diagnostics and log lines; its format
/// is compiler-dependent and takes no part in identity.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Descriptor for type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ─── RegistryBuilder ────────────────────────────────────────────────

/// Build-phase companion of [`ParserRegistry`].
///
/// Collects registrations from one or more producers, then finalizes
/// with [`build`](Self::build). Registration order matters only for
/// collisions: the last writer wins, silently.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<TypeKey, ConvertFn>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `f` as the conversion for `key`.
    ///
    /// Registering a key twice replaces the earlier entry. The caller is
    /// responsible for `f` producing values of the type `key` describes;
    /// the typed helpers [`register_fn`](Self::register_fn) and
    /// [`register_str`](Self::register_str) guarantee it by construction.
    pub fn register(&mut self, key: TypeKey, f: ConvertFn) {
        self.entries.insert(key, f);
    }

    /// Registers a typed conversion for `T`, deriving the key from the
    /// type.
    pub fn register_fn<T, F>(&mut self, f: F)
    where
        T: Any,
        F: Fn(&str) -> Result<T, FormatError> + Send + Sync + 'static,
    {
        self.register(TypeKey::of::<T>(), erase(f));
    }

    /// Registers the plain-string parser of `T`, its [`FromStr`] impl.
    pub fn register_str<T>(&mut self)
    where
        T: FromStr + Any,
        T::Err: std::fmt::Display,
    {
        self.register(TypeKey::of::<T>(), str_conv::<T>());
    }

    /// Copies every entry of `other` into this builder.
    ///
    /// On key collision the merged-in entry wins, consistent with
    /// [`register`](Self::register). `other` is taken by value; clone it
    /// first when it is shared (clones are cheap).
    pub fn merge(&mut self, other: ParserRegistry) {
        tracing::trace!("Merging {} conversion entries", other.len());
        self.entries.extend(other.entries);
    }

    /// Finalizes into the read-only registry.
    pub fn build(self) -> ParserRegistry {
        tracing::debug!("Parser registry built with {} entries", self.entries.len());
        ParserRegistry {
            entries: self.entries,
        }
    }
}

// ─── ParserRegistry ─────────────────────────────────────────────────

/// Read-only mapping from target type to conversion function.
///
/// Built once through [`RegistryBuilder`] during loader setup. Immutable
/// after construction: extending means building a new registry and
/// merging this one in. Cloning is cheap, entries are shared.
#[derive(Clone)]
pub struct ParserRegistry {
    entries: HashMap<TypeKey, ConvertFn>,
}

impl ParserRegistry {
    /// Starts an empty build phase.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up the conversion function registered for `key`.
    ///
    /// `None` means no entry, a normal negative: the caller falls back
    /// to whatever strategy it owns for the type.
    pub fn lookup(&self, key: &TypeKey) -> Option<&ConvertFn> {
        self.entries.get(key)
    }

    /// Returns true when `key` has a registered conversion.
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered conversions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the conversion registered for `T` on `raw` and downcasts
    /// the result.
    ///
    /// Returns `None` when `T` has no entry.
    ///
    /// # Panics
    ///
    /// Panics if the registered function produces a value of some other
    /// type. That can only come from a mismatched [`register`] call and
    /// is a registry-construction bug, not an input error.
    ///
    /// [`register`]: RegistryBuilder::register
    pub fn convert<T: Any>(&self, raw: &str) -> Option<Result<T, FormatError>> {
        let key = TypeKey::of::<T>();
        let f = self.lookup(&key)?;
        Some(f(raw).map(|boxed| match boxed.downcast::<T>() {
            Ok(value) => *value,
            Err(_) => panic!("Conversion registered for {key} produced a foreign type"),
        }))
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.entries.keys().map(TypeKey::name).collect();
        types.sort_unstable();
        f.debug_struct("ParserRegistry")
            .field("types", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_key_identity_is_the_type() {
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<i64>());
    }

    #[test]
    fn type_key_name_is_diagnostic_only() {
        let key = TypeKey::of::<u32>();
        assert_eq!(key.name(), "u32");
        assert_eq!(key.to_string(), "u32");
    }

    #[test]
    fn register_then_lookup() {
        let mut builder = ParserRegistry::builder();
        builder.register_str::<u32>();
        let registry = builder.build();

        let key = TypeKey::of::<u32>();
        assert!(registry.contains(&key));
        assert_eq!(registry.len(), 1);

        let f = registry.lookup(&key).expect("entry should exist");
        let boxed = f("7").unwrap();
        assert_eq!(*boxed.downcast::<u32>().unwrap(), 7);
    }

    #[test]
    fn lookup_miss_is_none() {
        let registry = ParserRegistry::builder().build();
        assert!(registry.lookup(&TypeKey::of::<u32>()).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn second_registration_wins() {
        let mut builder = ParserRegistry::builder();
        builder.register_fn(|_: &str| Ok(1i64));
        builder.register_fn(|_: &str| Ok(2i64));
        let registry = builder.build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.convert::<i64>("").unwrap().unwrap(), 2);
    }

    #[test]
    fn merged_entries_win_on_collision() {
        let mut later = ParserRegistry::builder();
        later.register_fn(|_: &str| Ok(2i64));
        let later = later.build();

        let mut builder = ParserRegistry::builder();
        builder.register_fn(|_: &str| Ok(1i64));
        builder.merge(later);
        let registry = builder.build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.convert::<i64>("").unwrap().unwrap(), 2);
    }

    #[test]
    fn convert_returns_none_without_entry() {
        let registry = ParserRegistry::builder().build();
        assert!(registry.convert::<i64>("1").is_none());
    }

    #[test]
    fn convert_surfaces_conversion_errors() {
        let mut builder = ParserRegistry::builder();
        builder.register_str::<u32>();
        let registry = builder.build();

        let result = registry.convert::<u32>("minus one").unwrap();
        assert!(matches!(result, Err(FormatError::InvalidValue { .. })));
    }

    #[test]
    fn clones_share_entries() {
        let mut builder = ParserRegistry::builder();
        builder.register_str::<bool>();
        let registry = builder.build();
        let clone = registry.clone();

        assert!(registry.convert::<bool>("true").unwrap().unwrap());
        assert!(!clone.convert::<bool>("false").unwrap().unwrap());
    }

    #[test]
    fn debug_lists_registered_type_names() {
        let mut builder = ParserRegistry::builder();
        builder.register_str::<bool>();
        let registry = builder.build();

        let rendered = format!("{registry:?}");
        assert!(rendered.contains("bool"), "missing type name in: {rendered}");
    }

    #[test]
    #[should_panic(expected = "foreign type")]
    fn mismatched_registration_panics_on_convert() {
        // Hand-built entry violating the key/function contract. The
        // typed helpers make this impossible; raw `register` does not.
        let mut builder = ParserRegistry::builder();
        builder.register(TypeKey::of::<u32>(), erase(|_: &str| Ok("oops".to_string())));
        let registry = builder.build();

        let _ = registry.convert::<u32>("1");
    }
}
