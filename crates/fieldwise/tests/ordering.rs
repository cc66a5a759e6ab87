use std::cmp::Ordering;
use std::sync::LazyLock;

use fieldwise::{Comparison, FieldComparable};

#[derive(Debug, Clone, Copy)]
struct Version {
    major: u32,
    minor: u32,
}

impl Version {
    fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl FieldComparable for Version {
    fn comparison() -> &'static Comparison<Version> {
        static ENGINE: LazyLock<Comparison<Version>> = LazyLock::new(|| {
            Comparison::new()
                .append(|v: &Version| &v.major)
                .append(|v: &Version| &v.minor)
        });
        &ENGINE
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.field_cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.field_cmp(other)
    }
}

#[test]
fn primary_field_decides_first() {
    let engine = Version::comparison();
    assert_eq!(engine.compare(&Version::new(1, 9), &Version::new(2, 0)), Ordering::Less);
    assert_eq!(engine.compare(&Version::new(2, 0), &Version::new(1, 9)), Ordering::Greater);
}

#[test]
fn later_fields_break_ties() {
    let engine = Version::comparison();
    assert_eq!(engine.compare(&Version::new(1, 1), &Version::new(1, 2)), Ordering::Less);
    assert_eq!(engine.compare(&Version::new(1, 2), &Version::new(1, 2)), Ordering::Equal);
}

#[test]
fn swapping_field_order_changes_the_tie_break() {
    let minor_first: Comparison<Version> = Comparison::new()
        .append(|v: &Version| &v.minor)
        .append(|v: &Version| &v.major);

    let lhs = Version::new(1, 9);
    let rhs = Version::new(2, 0);
    assert_eq!(Version::comparison().compare(&lhs, &rhs), Ordering::Less);
    assert_eq!(minor_first.compare(&lhs, &rhs), Ordering::Greater);
}

#[test]
fn derived_bounds_accept_ties() {
    let a = Version::new(1, 0);
    let b = Version::new(1, 5);
    let c = Version::new(2, 0);
    let engine = Version::comparison();

    assert_ne!(engine.compare(&a, &c), Ordering::Greater);
    assert!(engine.le(&a, &b));
    assert!(engine.ge(&b, &a));
    assert!(engine.le(&a, &a));
    assert!(engine.ge(&a, &a));
    assert!(!engine.lt(&a, &a));
    assert!(!engine.gt(&a, &a));
}

#[test]
fn trait_wiring_exposes_the_operators() {
    let old = Version::new(1, 9);
    let new = Version::new(2, 0);

    assert!(old.field_lt(&new));
    assert!(old.field_le(&new));
    assert!(new.field_gt(&old));
    assert!(new.field_ge(&old));
    assert!(old < new);
    assert!(new >= old);
    assert_eq!(old.max(new), new);
}

#[test]
fn raw_comparators_mix_with_projections() {
    // Descending by major, then ascending by minor.
    let engine: Comparison<Version> = Comparison::new()
        .append_with(|lhs: &Version, rhs: &Version| rhs.major.cmp(&lhs.major))
        .append(|v: &Version| &v.minor);

    assert_eq!(engine.compare(&Version::new(2, 0), &Version::new(1, 9)), Ordering::Less);
    assert_eq!(engine.compare(&Version::new(1, 1), &Version::new(1, 4)), Ordering::Less);
}

#[test]
fn zero_field_engine_reports_equal() {
    let engine = Comparison::<Version>::new();
    assert_eq!(engine.compare(&Version::new(1, 0), &Version::new(9, 9)), Ordering::Equal);
    assert!(engine.le(&Version::new(1, 0), &Version::new(9, 9)));
    assert!(engine.ge(&Version::new(1, 0), &Version::new(9, 9)));
}

#[test]
fn comparison_is_antisymmetric_over_the_field_list() {
    let engine = Version::comparison();
    let pairs = [
        (Version::new(1, 0), Version::new(1, 0)),
        (Version::new(1, 0), Version::new(1, 1)),
        (Version::new(3, 2), Version::new(2, 9)),
    ];
    for (lhs, rhs) in pairs {
        assert_eq!(engine.compare(&lhs, &rhs), engine.compare(&rhs, &lhs).reverse());
    }
}
