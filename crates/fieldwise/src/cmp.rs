//! Lexicographic three-way comparison engine.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A registered per-field three-way comparator.
type CmpOp<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Builder that derives a three-way comparison for `T` from an ordered list
/// of per-field comparators.
///
/// Fields are evaluated in declaration order and the first non-equal result
/// wins, so declaration order is the tie-break priority. A builder with no
/// fields considers every pair of values equal.
pub struct Comparison<T> {
    ops: Vec<CmpOp<T>>,
}

impl<T> Comparison<T> {
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

    fn with_op(&self, op: CmpOp<T>) -> Self {
        let mut ops = self.ops.clone();
        ops.push(op);
        Self { ops }
    }

    /// Registers a field ordered through its natural order.
    pub fn append<V, F>(&self, projection: F) -> Self
    where
        V: Ord + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        self.with_op(Arc::new(move |lhs, rhs| {
            projection(lhs).cmp(projection(rhs))
        }))
    }

    /// Registers a raw comparator over the whole value.
    pub fn append_with<F>(&self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.with_op(Arc::new(comparator))
    }

    /// Returns the first non-equal field result, or `Ordering::Equal` when
    /// every registered field ties.
    pub fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        for op in &self.ops {
            let result = op(lhs, rhs);
            if result != Ordering::Equal {
                return result;
            }
        }
        Ordering::Equal
    }

    /// Returns `true` if `lhs` orders strictly before `rhs`.
    pub fn lt(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    /// Returns `true` if `lhs` orders before `rhs` or ties with it.
    pub fn le(&self, lhs: &T, rhs: &T) -> bool {
        matches!(self.compare(lhs, rhs), Ordering::Less | Ordering::Equal)
    }

    /// Returns `true` if `lhs` orders strictly after `rhs`.
    pub fn gt(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }

    /// Returns `true` if `lhs` orders after `rhs` or ties with it.
    pub fn ge(&self, lhs: &T, rhs: &T) -> bool {
        matches!(self.compare(lhs, rhs), Ordering::Greater | Ordering::Equal)
    }
}

impl<T> Clone for Comparison<T> {
    fn clone(&self) -> Self {
        Self {
            ops: self.ops.clone(),
        }
    }
}

impl<T> Default for Comparison<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparison")
            .field("fields", &self.ops.len())
            .finish_non_exhaustive()
    }
}
