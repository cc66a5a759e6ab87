#![deny(missing_docs)]

//! Field-combinator builders that derive equality, hashing, ordering, and
//! text descriptions for a value type from an ordered list of per-field
//! accessors, instead of hand-writing the four operations per type.
//!
//! Each engine is generic over an owner type `T` and follows one pattern:
//! accumulate per-field operations with `append_*` calls, then fold them
//! over a pair (or a single instance) of `T`. Appending never mutates the
//! receiver; it returns a new builder, so a builder built once — typically
//! inside a `LazyLock` static owned by the value type — can be shared by
//! concurrent readers without synchronization.
//!
//! - [`Equality`] folds per-field predicates into one short-circuiting
//!   equality test.
//! - [`Hashing`] folds per-field contributions into one polynomial hash and
//!   embeds an [`Equality`] over the same fields, so equal values hash
//!   equally by construction.
//! - [`Comparison`] folds per-field three-way comparisons lexicographically.
//! - [`Description`] folds named field renderers into a diagnostic string.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use fieldwise::{Equality, FieldEquatable};
//!
//! struct Person {
//!     first_name: Option<String>,
//!     last_name: String,
//! }
//!
//! impl FieldEquatable for Person {
//!     fn equality() -> &'static Equality<Person> {
//!         static ENGINE: LazyLock<Equality<Person>> = LazyLock::new(|| {
//!             Equality::new()
//!                 .append_optional(|p: &Person| p.first_name.as_deref())
//!                 .append(|p: &Person| &p.last_name)
//!         });
//!         &ENGINE
//!     }
//! }
//!
//! let tom = Person {
//!     first_name: Some("Tom".to_string()),
//!     last_name: "Quist".to_string(),
//! };
//! let twin = Person {
//!     first_name: Some("Tom".to_string()),
//!     last_name: "Quist".to_string(),
//! };
//! assert!(tom.field_eq(&twin));
//! ```

use std::cmp::Ordering;

mod cmp;
mod describe;
mod eq;
pub mod errors;
mod hash;

pub use cmp::Comparison;
pub use describe::{DescribeOptions, Description};
pub use eq::Equality;
pub use errors::FieldwiseError;
pub use hash::{stable_hash, HashConfig, Hashing};

/// Adopts a registered [`Equality`] engine as the type's equality.
///
/// Implementors provide the engine getter; `field_eq` is derived. Wiring
/// the engine into the native operator is one more delegation:
///
/// ```ignore
/// impl PartialEq for Person {
///     fn eq(&self, other: &Self) -> bool {
///         self.field_eq(other)
///     }
/// }
/// impl Eq for Person {}
/// ```
pub trait FieldEquatable: Sized + 'static {
    /// Returns the process-wide equality engine for `Self`.
    fn equality() -> &'static Equality<Self>;

    /// Compares two instances field by field.
    fn field_eq(&self, other: &Self) -> bool {
        Self::equality().equals(self, other)
    }
}

/// Adopts a registered [`Hashing`] engine as the type's hash.
///
/// The engine embeds an equality over the same field list, so a hashable
/// type needs no separate equality registration: `field_eq` is derived
/// here, and a [`FieldEquatable`] impl can simply return
/// `Self::hashing().equality()`. The native hook delegates through
/// `std::hash::Hash`:
///
/// ```ignore
/// impl Hash for Person {
///     fn hash<H: Hasher>(&self, state: &mut H) {
///         state.write_u64(self.field_hash());
///     }
/// }
/// ```
pub trait FieldHashable: Sized + 'static {
    /// Returns the process-wide hashing engine for `Self`.
    fn hashing() -> &'static Hashing<Self>;

    /// Hashes the instance field by field.
    fn field_hash(&self) -> u64 {
        Self::hashing().hash(self)
    }

    /// Compares two instances through the engine's embedded equality.
    fn field_eq(&self, other: &Self) -> bool {
        Self::hashing().equals(self, other)
    }
}

/// Adopts a registered [`Comparison`] engine as the type's ordering.
///
/// `Ord`/`PartialOrd` impls delegating to `field_cmp` wire the engine into
/// the native comparison operators.
pub trait FieldComparable: Sized + 'static {
    /// Returns the process-wide comparison engine for `Self`.
    fn comparison() -> &'static Comparison<Self>;

    /// Compares two instances field by field.
    fn field_cmp(&self, other: &Self) -> Ordering {
        Self::comparison().compare(self, other)
    }

    /// Returns `true` if `self` orders strictly before `other`.
    fn field_lt(&self, other: &Self) -> bool {
        Self::comparison().lt(self, other)
    }

    /// Returns `true` if `self` orders before `other` or ties with it.
    fn field_le(&self, other: &Self) -> bool {
        Self::comparison().le(self, other)
    }

    /// Returns `true` if `self` orders strictly after `other`.
    fn field_gt(&self, other: &Self) -> bool {
        Self::comparison().gt(self, other)
    }

    /// Returns `true` if `self` orders after `other` or ties with it.
    fn field_ge(&self, other: &Self) -> bool {
        Self::comparison().ge(self, other)
    }
}

/// Adopts a registered [`Description`] engine as the type's rendering.
///
/// A `Display` impl delegating to `field_describe` wires the engine into
/// the native formatting machinery.
pub trait FieldDescribable: Sized + 'static {
    /// Returns the process-wide description engine for `Self`.
    fn description() -> &'static Description<Self>;

    /// Renders the instance field by field.
    fn field_describe(&self) -> String {
        Self::description().describe(self)
    }
}

/// Optional debug-flavor rendering on top of [`FieldDescribable`].
///
/// The debug engine defaults to the display engine; override
/// `debug_description` to register a distinct one. A `Debug` impl
/// delegating to `field_debug` completes the wiring.
pub trait FieldDebugDescribable: FieldDescribable {
    /// Returns the process-wide debug description engine for `Self`.
    fn debug_description() -> &'static Description<Self> {
        Self::description()
    }

    /// Renders the instance for debugging.
    fn field_debug(&self) -> String {
        Self::debug_description().describe(self)
    }
}
