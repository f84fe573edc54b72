//! Compile-time allocation policies. The fit policy decides which free block
//! serves a request, the order policy decides where a freed block lands in
//! its size-class list. Both are zero-sized type parameters of
//! [`crate::Arena`], so the searcher and the insert routines monomorphize to
//! straight-line code with no per-call dispatch.
//!
//! The traits are sealed: the search and insert loops are written against the
//! exact invariants these four types promise, so foreign policies are not a
//! supported extension point.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::FirstFit {}
    impl Sealed for super::BestFit {}
    impl Sealed for super::Lifo {}
    impl Sealed for super::AddressOrdered {}
}

/// Take the first sufficiently large free block the search encounters.
pub struct FirstFit;

/// Scan every candidate and take the smallest sufficiently large one. In the
/// segregated arena the scan stops at the first size class that yields any
/// fit: a fit from class `c` is never worse than one from class `c + 1`.
pub struct BestFit;

/// Freed blocks are pushed at the head of their size-class list. O(1).
pub struct Lifo;

/// Freed blocks keep their size-class list sorted by ascending offset. Insert
/// is O(length of the list); frees that arrive in reverse allocation order
/// coalesce against neighbours found early in the walk.
pub struct AddressOrdered;

/// Fit policy of an arena. See [`FirstFit`] and [`BestFit`].
pub trait FitPolicy: sealed::Sealed {
    /// True when the search must keep scanning a candidate list after the
    /// first sufficient block, tracking the smallest.
    const EXHAUSTIVE: bool;
}

impl FitPolicy for FirstFit {
    const EXHAUSTIVE: bool = false;
}

impl FitPolicy for BestFit {
    const EXHAUSTIVE: bool = true;
}

/// Free-list insertion order of a segregated arena. See [`Lifo`] and
/// [`AddressOrdered`].
pub trait OrderPolicy: sealed::Sealed {
    /// True when lists are kept sorted by ascending offset.
    const ADDRESS_ORDERED: bool;
}

impl OrderPolicy for Lifo {
    const ADDRESS_ORDERED: bool = false;
}

impl OrderPolicy for AddressOrdered {
    const ADDRESS_ORDERED: bool = true;
}
