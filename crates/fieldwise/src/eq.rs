//! Field-by-field equality engine.

use std::fmt;
use std::sync::Arc;

/// A registered per-field equality predicate, uniform over the field's type.
type EqOp<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Builder that derives an equality test for `T` from an ordered list of
/// per-field accessors.
///
/// Every `append_*` method returns a new builder with the field added; the
/// receiver is left untouched, so a partially-built chain can be shared and
/// extended in several directions. A builder with no fields reports every
/// pair of values as equal.
///
/// Evaluation is a conjunction over the registered fields in declaration
/// order and stops at the first mismatch, so cheap or highly discriminating
/// fields benefit from being registered first.
pub struct Equality<T> {
    ops: Vec<EqOp<T>>,
}

impl<T> Equality<T> {
    /// Creates an engine with no registered fields.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn with_op(&self, op: EqOp<T>) -> Self {
        let mut ops = self.ops.clone();
        ops.push(op);
        Self { ops }
    }

    /// Registers a field compared through its intrinsic equality.
    pub fn append<V, F>(&self, accessor: F) -> Self
    where
        V: PartialEq + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| accessor(lhs) == accessor(rhs)))
    }

    /// Registers a field compared through an explicit equality function,
    /// for field types without an intrinsic equality.
    pub fn append_with<V, F, E>(&self, accessor: F, eq: E) -> Self
    where
        V: ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
        E: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| eq(accessor(lhs), accessor(rhs))))
    }

    /// Registers an optional-valued field. Two absent values are equal;
    /// absent and present are not.
    pub fn append_optional<V, F>(&self, accessor: F) -> Self
    where
        V: PartialEq + ?Sized,
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| {
            match (accessor(lhs), accessor(rhs)) {
                (None, None) => true,
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }))
    }

    /// Registers an ordered sequence field. Elements are compared in
    /// lockstep; the comparison stops at the first mismatching pair, and a
    /// sequence that exhausts before the other makes the pair unequal.
    pub fn append_sequence<V, F>(&self, accessor: F) -> Self
    where
        V: PartialEq,
        F: for<'a> Fn(&'a T) -> Box<dyn Iterator<Item = &'a V> + 'a> + Send + Sync + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| {
            let mut left = accessor(lhs);
            let mut right = accessor(rhs);
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return true,
                    (Some(a), Some(b)) if a == b => {}
                    _ => return false,
                }
            }
        }))
    }

    /// Registers a sized collection field. Differing lengths are rejected
    /// in O(1) before any element is compared.
    pub fn append_collection<V, F>(&self, accessor: F) -> Self
    where
        V: PartialEq,
        F: for<'a> Fn(&'a T) -> Box<dyn ExactSizeIterator<Item = &'a V> + 'a>
            + Send
            + Sync
            + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| {
            let left = accessor(lhs);
            let right = accessor(rhs);
            if left.len() != right.len() {
                return false;
            }
            for (a, b) in left.zip(right) {
                if a != b {
                    return false;
                }
            }
            true
        }))
    }

    /// Returns `true` if every registered field compares equal between
    /// `lhs` and `rhs`. Fields after the first mismatch are not evaluated.
    pub fn equals(&self, lhs: &T, rhs: &T) -> bool {
        self.ops.iter().all(|op| op(lhs, rhs))
    }
}

impl<T> Clone for Equality<T> {
    fn clone(&self) -> Self {
        Self {
            ops: self.ops.clone(),
        }
    }
}

impl<T> Default for Equality<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equality")
            .field("fields", &self.ops.len())
            .finish_non_exhaustive()
    }
}
