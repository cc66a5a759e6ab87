//! Polynomial field-hash engine.
//!
//! Hash values are folded as `acc = acc * constant + contribution` with
//! wrapping arithmetic, one contribution per registered field. Per-field
//! contributions for intrinsically hashable types come from SipHash-1-3
//! with fixed keys, so they are stable across processes and platforms.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;

use crate::eq::Equality;
use crate::errors::FieldwiseError;

/// A registered per-field hash contribution.
type HashOp<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

// Fixed SipHash keys; changing them changes every derived hash value.
const STABLE_KEY_0: u64 = 0x6669_656c_6477_6973;
const STABLE_KEY_1: u64 = 0x6861_7368_6b65_7973;

/// Computes the stable contribution of a single hashable value.
///
/// This is the hash every intrinsically hashable `append` variant feeds
/// into the polynomial fold. It is exposed so that custom fields registered
/// through [`Hashing::append_with`] can compose with the same policy.
pub fn stable_hash<V: Hash + ?Sized>(value: &V) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(STABLE_KEY_0, STABLE_KEY_1);
    value.hash(&mut hasher);
    hasher.finish()
}

/// Multiplier and seed for the polynomial hash fold.
///
/// Both values should be non-zero odd numbers to minimize collision
/// clustering from the polynomial scheme; the defaults are 37 and 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Multiplier applied to the accumulator before each contribution.
    pub constant: u64,
    /// Seed the fold starts from; also the hash of a zero-field engine.
    pub initial: u64,
}

impl HashConfig {
    /// Creates a configuration without validating the values.
    pub const fn new(constant: u64, initial: u64) -> Self {
        Self { constant, initial }
    }

    /// Creates a configuration, rejecting zero or even values.
    ///
    /// ```
    /// use fieldwise::HashConfig;
    ///
    /// assert!(HashConfig::checked(37, 17).is_ok());
    /// assert!(HashConfig::checked(36, 17).is_err());
    /// assert!(HashConfig::checked(37, 0).is_err());
    /// ```
    pub fn checked(constant: u64, initial: u64) -> Result<Self, FieldwiseError> {
        if constant == 0 || constant % 2 == 0 {
            return Err(FieldwiseError::InvalidHashConstant { value: constant });
        }
        if initial == 0 || initial % 2 == 0 {
            return Err(FieldwiseError::InvalidHashInitial { value: initial });
        }
        Ok(Self { constant, initial })
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            constant: 37,
            initial: 17,
        }
    }
}

/// Builder that derives a hash function for `T` from an ordered list of
/// per-field accessors.
///
/// Every append registers the field with the hash fold and with an embedded
/// [`Equality`] engine, so the pair honors the hash/equality contract by
/// construction: values the engine considers equal hash equally.
///
/// Like [`Equality`], the builder is persistent; `append_*` returns a new
/// value and leaves the receiver untouched. A builder with no fields hashes
/// every value to the configured `initial`.
pub struct Hashing<T> {
    equality: Equality<T>,
    ops: Vec<HashOp<T>>,
    config: HashConfig,
}

impl<T> Hashing<T> {
    /// Creates an engine with no registered fields and the default
    /// [`HashConfig`].
    pub fn new() -> Self {
        Self::with_config(HashConfig::default())
    }

    /// Creates an engine with no registered fields and an explicit
    /// configuration.
    pub fn with_config(config: HashConfig) -> Self {
        Self {
            equality: Equality::new(),
            ops: Vec::new(),
            config,
        }
    }

    /// Returns the fold configuration.
    pub fn config(&self) -> HashConfig {
        self.config
    }

    /// Returns the embedded equality engine built from the same field list.
    pub fn equality(&self) -> &Equality<T> {
        &self.equality
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn extended(&self, op: HashOp<T>, equality: Equality<T>) -> Self {
        let mut ops = self.ops.clone();
        ops.push(op);
        Self {
            equality,
            ops,
            config: self.config,
        }
    }

    /// Registers an intrinsically hashable field.
    pub fn append<V, F>(&self, accessor: F) -> Self
    where
        V: Hash + PartialEq + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        let accessor = Arc::new(accessor);
        let eq_accessor = Arc::clone(&accessor);
        self.extended(
            Arc::new(move |value| stable_hash(accessor(value))),
            self.equality.append(move |value| eq_accessor(value)),
        )
    }

    /// Registers a field with explicit hash and equality functions.
    ///
    /// The caller is responsible for keeping the pair consistent: values the
    /// equality function accepts as equal must receive the same hash.
    pub fn append_with<V, F, H, E>(&self, accessor: F, hasher: H, eq: E) -> Self
    where
        V: ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
        H: Fn(&V) -> u64 + Send + Sync + 'static,
        E: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        let accessor = Arc::new(accessor);
        let eq_accessor = Arc::clone(&accessor);
        self.extended(
            Arc::new(move |value| hasher(accessor(value))),
            self.equality.append_with(move |value| eq_accessor(value), eq),
        )
    }

    /// Registers an optional-valued field. An absent value contributes the
    /// sentinel 0 to the fold.
    pub fn append_optional<V, F>(&self, accessor: F) -> Self
    where
        V: Hash + PartialEq + ?Sized,
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
    {
        let accessor = Arc::new(accessor);
        let eq_accessor = Arc::clone(&accessor);
        self.extended(
            Arc::new(move |value| match accessor(value) {
                Some(field) => stable_hash(field),
                None => 0,
            }),
            self.equality.append_optional(move |value| eq_accessor(value)),
        )
    }

    /// Registers an ordered sequence field.
    ///
    /// Elements are folded with the same `constant`/`initial` pair as the
    /// parent fold before the result enters it, so nested structures hash
    /// through one consistent recursive polynomial scheme. Element order
    /// affects the result; callers exposing an unordered container are
    /// responsible for the stability of its iteration order.
    pub fn append_sequence<V, F>(&self, accessor: F) -> Self
    where
        V: Hash + PartialEq,
        F: for<'a> Fn(&'a T) -> Box<dyn Iterator<Item = &'a V> + 'a> + Send + Sync + 'static,
    {
        let accessor = Arc::new(accessor);
        let eq_accessor = Arc::clone(&accessor);
        let HashConfig { constant, initial } = self.config;
        self.extended(
            Arc::new(move |value| {
                accessor(value).fold(initial, |acc, item| {
                    acc.wrapping_mul(constant).wrapping_add(stable_hash(item))
                })
            }),
            self.equality.append_sequence(move |value| eq_accessor(value)),
        )
    }

    /// Registers a sized collection field.
    ///
    /// Hashes like [`Hashing::append_sequence`]; the embedded equality
    /// engine additionally rejects differing lengths in O(1).
    pub fn append_collection<V, F>(&self, accessor: F) -> Self
    where
        V: Hash + PartialEq,
        F: for<'a> Fn(&'a T) -> Box<dyn ExactSizeIterator<Item = &'a V> + 'a>
            + Send
            + Sync
            + 'static,
    {
        let accessor = Arc::new(accessor);
        let eq_accessor = Arc::clone(&accessor);
        let HashConfig { constant, initial } = self.config;
        self.extended(
            Arc::new(move |value| {
                accessor(value).fold(initial, |acc, item| {
                    acc.wrapping_mul(constant).wrapping_add(stable_hash(item))
                })
            }),
            self.equality.append_collection(move |value| eq_accessor(value)),
        )
    }

    /// Folds the registered field contributions into a single hash value.
    pub fn hash(&self, value: &T) -> u64 {
        let HashConfig { constant, initial } = self.config;
        self.ops.iter().fold(initial, |acc, op| {
            acc.wrapping_mul(constant).wrapping_add(op(value))
        })
    }

    /// Compares two values through the embedded equality engine.
    pub fn equals(&self, lhs: &T, rhs: &T) -> bool {
        self.equality.equals(lhs, rhs)
    }
}

impl<T> Clone for Hashing<T> {
    fn clone(&self) -> Self {
        Self {
            equality: self.equality.clone(),
            ops: self.ops.clone(),
            config: self.config,
        }
    }
}

impl<T> Default for Hashing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Hashing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hashing")
            .field("fields", &self.ops.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
