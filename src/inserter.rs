//! Persistent-style insertion into sorted sequences.
//!
//! This module provides [`Inserter`], a small component that is configured
//! once and then applied repeatedly to `(sequence, value)` pairs, typically
//! through a fold. Every call returns a brand new sorted `Vec`; the input
//! slice is left untouched, so earlier versions of the sequence remain valid
//! for as long as the caller keeps them.
//!
//! # Overview
//!
//! An `Inserter` combines two pieces of configuration, both fixed at
//! construction time:
//!
//! - an ordering — an explicit [`Comparator`], a key extractor, or the
//!   natural order of the element type;
//! - a [`Uniqueness`] policy deciding what happens when the inserted value
//!   compares equal to an existing element.
//!
//! | Policy                          | Equal-key behavior                               |
//! |---------------------------------|--------------------------------------------------|
//! | [`Uniqueness::Unique`] (default)| existing element is replaced (last write wins)   |
//! | [`Uniqueness::MergeWith`]       | `merge(existing, incoming)` replaces the element |
//! | [`Uniqueness::AllowDuplicates`] | value is inserted before the equal element       |
//!
//! # Functional Programming Principles
//!
//! All operations follow functional programming principles:
//! - **Referential Transparency**: Same inputs always produce same outputs
//! - **Immutability**: `insert` returns a new sequence without modifying the input
//! - **No Side Effects**: Pure functions with no observable side effects
//!
//! # Time Complexity
//!
//! The insertion point is found with O(log n) comparisons by binary search
//! over an open interval of signed indices. Materializing the result is an
//! O(n) copy; no structural sharing is attempted, so the old and new
//! sequences are fully independent.
//!
//! # Examples
//!
//! ```rust
//! use sortfold::Inserter;
//!
//! let add: Inserter<i32> = Inserter::new();
//!
//! // Fold values into a sorted sequence from an empty seed.
//! let sorted = add.accumulate([10, 59, 34, 93, 9, 310, 93, 29]);
//! assert_eq!(sorted, vec![9, 10, 29, 34, 59, 93, 310]);
//!
//! // Earlier versions stay valid: insertion never mutates its input.
//! let first = add.insert(&[], 5);
//! let second = add.insert(&first, 2);
//! assert_eq!(first, vec![5]);
//! assert_eq!(second, vec![2, 5]);
//! ```
//!
//! # Thread Safety
//!
//! An `Inserter` holds only its comparator and policy, both immutable after
//! construction and bound to be `Send + Sync`. Any number of threads may call
//! [`Inserter::insert`] concurrently on shared input slices without locking.

use std::cmp::Ordering;

use crate::ordering::{self, Comparator};

/// A merge combinator for equal-key insertions.
///
/// Called as `merge(existing, incoming)` — the element already in the
/// sequence on the left, the value being inserted on the right. The result
/// replaces the existing element in place. The combinator is applied strictly
/// in encounter order; no associativity is assumed or enforced.
pub type Merge<T> = Box<dyn Fn(&T, &T) -> T + Send + Sync>;

/// Policy for handling a value whose key already exists in the sequence.
///
/// Resolved once at construction time; see the [module table](self) for the
/// observable behavior of each variant.
pub enum Uniqueness<T> {
    /// At most one element per equivalence class; a newly inserted equal-key
    /// value replaces the existing element (last write wins).
    Unique,
    /// Duplicates are permitted; an equal-key value is inserted immediately
    /// before the equal element found by the search, preserving all prior
    /// duplicates.
    AllowDuplicates,
    /// An equal-key insertion substitutes `merge(existing, incoming)` for the
    /// existing element.
    MergeWith(Merge<T>),
}

impl<T> Default for Uniqueness<T> {
    #[inline]
    fn default() -> Self {
        Self::Unique
    }
}

impl<T> std::fmt::Debug for Uniqueness<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unique => formatter.write_str("Unique"),
            Self::AllowDuplicates => formatter.write_str("AllowDuplicates"),
            Self::MergeWith(_) => formatter.write_str("MergeWith(..)"),
        }
    }
}

/// Represents an invalid `Inserter` configuration.
///
/// Returned by [`InserterBuilder::build`] when both an ordering function and
/// a key extractor were supplied. The two are mutually exclusive ways of
/// describing the same total order, so the conflict is reported before any
/// insertion is possible rather than resolved silently.
///
/// # Examples
///
/// ```rust
/// use sortfold::{ConfigurationError, Inserter};
///
/// let error = Inserter::<i32>::builder()
///     .ordering(|probe, candidate| probe.cmp(candidate))
///     .key(|value| *value)
///     .build()
///     .unwrap_err();
/// assert_eq!(error, ConfigurationError);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "InserterBuilder::build: both an ordering function and a key extractor were configured. Supply at most one."
        )
    }
}

impl std::error::Error for ConfigurationError {}

/// Builder for [`Inserter`].
///
/// Collects the optional ordering configuration and the uniqueness policy,
/// then validates them in [`build`](Self::build). An ordering may be given
/// either as an explicit comparator ([`ordering`](Self::ordering)) or as a
/// key extractor ([`key`](Self::key)) — never both.
///
/// # Examples
///
/// ```rust
/// use sortfold::Inserter;
///
/// let add = Inserter::builder()
///     .key(|entry: &(i32, &str)| entry.0)
///     .allow_duplicates()
///     .build()
///     .unwrap();
///
/// let entries = add.accumulate([(5, "date"), (3, "carrot"), (5, "eggplant")]);
/// assert_eq!(entries, vec![(3, "carrot"), (5, "eggplant"), (5, "date")]);
/// ```
pub struct InserterBuilder<T> {
    ordering: Option<Comparator<T>>,
    key: Option<Comparator<T>>,
    uniqueness: Uniqueness<T>,
}

impl<T> InserterBuilder<T> {
    /// Creates a builder with no explicit ordering and the default
    /// [`Uniqueness::Unique`] policy.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            ordering: None,
            key: None,
            uniqueness: Uniqueness::Unique,
        }
    }

    /// Configures an explicit two-argument comparator.
    ///
    /// The comparator is called as `compare(probe, candidate)`, where `probe`
    /// is the value being inserted; see [`Comparator`] for the contract it
    /// must satisfy.
    #[must_use]
    pub fn ordering<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.ordering = Some(Box::new(compare));
        self
    }

    /// Configures a key extractor; elements are ordered by comparing
    /// extracted keys with the natural order on `K`.
    ///
    /// Mutually exclusive with [`ordering`](Self::ordering) — configuring
    /// both makes [`build`](Self::build) fail.
    #[must_use]
    pub fn key<K, F>(mut self, extract: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.key = Some(ordering::comparing(extract));
        self
    }

    /// Sets the uniqueness policy.
    #[must_use]
    pub fn uniqueness(mut self, uniqueness: Uniqueness<T>) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    /// Shorthand for `uniqueness(Uniqueness::AllowDuplicates)`.
    #[must_use]
    pub fn allow_duplicates(self) -> Self {
        self.uniqueness(Uniqueness::AllowDuplicates)
    }

    /// Shorthand for `uniqueness(Uniqueness::MergeWith(..))` with the given
    /// combinator; see [`Merge`] for the calling convention.
    #[must_use]
    pub fn merge_with<F>(self, merge: F) -> Self
    where
        F: Fn(&T, &T) -> T + Send + Sync + 'static,
    {
        self.uniqueness(Uniqueness::MergeWith(Box::new(merge)))
    }

    /// Validates the configuration and constructs the [`Inserter`].
    ///
    /// Falls back to the natural order on `T` when neither a comparator nor
    /// a key extractor was configured; the `Ord` bound feeds only that
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if both an ordering function and a key
    /// extractor were supplied.
    pub fn build(self) -> Result<Inserter<T>, ConfigurationError>
    where
        T: Ord,
    {
        let compare = match (self.ordering, self.key) {
            (Some(_), Some(_)) => return Err(ConfigurationError),
            (Some(compare), None) | (None, Some(compare)) => compare,
            (None, None) => ordering::natural(),
        };

        Ok(Inserter {
            compare,
            uniqueness: self.uniqueness,
        })
    }
}

impl<T> Default for InserterBuilder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for InserterBuilder<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("InserterBuilder")
            .field("ordering", &self.ordering.is_some())
            .field("key", &self.key.is_some())
            .field("uniqueness", &self.uniqueness)
            .finish()
    }
}

/// Inserts values into sorted, immutable sequences.
///
/// Constructed once — directly via [`new`](Self::new) for the natural order,
/// or through [`builder`](Self::builder) for a custom ordering or uniqueness
/// policy — and then applied repeatedly via [`insert`](Self::insert) or
/// [`accumulate`](Self::accumulate).
///
/// # Examples
///
/// ```rust
/// use sortfold::Inserter;
///
/// let add = Inserter::builder()
///     .key(|entry: &(u32, u64)| entry.0)
///     .merge_with(|existing: &(u32, u64), incoming: &(u32, u64)| {
///         (existing.0, existing.1 + incoming.1)
///     })
///     .build()
///     .unwrap();
///
/// let totals = add.accumulate([(10, 20), (3, 31), (8, 22), (3, 102)]);
/// assert_eq!(totals, vec![(3, 133), (8, 22), (10, 20)]);
/// ```
pub struct Inserter<T> {
    compare: Comparator<T>,
    uniqueness: Uniqueness<T>,
}

impl<T: Ord> Inserter<T> {
    /// Creates an `Inserter` using the natural order on `T` and the default
    /// [`Uniqueness::Unique`] policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortfold::Inserter;
    ///
    /// let add: Inserter<i32> = Inserter::new();
    /// assert_eq!(add.accumulate([3, 1, 2, 1]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            compare: ordering::natural(),
            uniqueness: Uniqueness::Unique,
        }
    }
}

impl<T: Ord> Default for Inserter<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Inserter<T> {
    /// Returns a builder for configuring an `Inserter`.
    #[inline]
    #[must_use]
    pub fn builder() -> InserterBuilder<T> {
        InserterBuilder::new()
    }
}

impl<T: Clone> Inserter<T> {
    /// Inserts `value` into `sequence`, returning a new sorted sequence.
    ///
    /// The input must already be sorted under this `Inserter`'s ordering —
    /// which is guaranteed for any sequence this `Inserter` produced — and is
    /// never mutated: the caller may keep using it afterwards. The empty
    /// slice is the fold seed; inserting into it returns a singleton.
    ///
    /// Inserting a value whose key is already present is normal input, not an
    /// error; the configured [`Uniqueness`] policy decides the outcome.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons to locate the insertion point, O(n) to copy the
    /// elements into the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortfold::Inserter;
    ///
    /// let add: Inserter<i32> = Inserter::new();
    /// let sequence = add.insert(&[], 5);
    /// let sequence = add.insert(&sequence, 2);
    /// let sequence = add.insert(&sequence, 9);
    /// assert_eq!(sequence, vec![2, 5, 9]);
    /// ```
    #[must_use]
    pub fn insert(&self, sequence: &[T], value: T) -> Vec<T> {
        if sequence.is_empty() {
            return vec![value];
        }

        // Open interval (low, high): elements at index <= low compare
        // strictly less than `value`, elements at index >= high strictly
        // greater. The interval is over signed indices so the leftmost
        // insertion point (position 0) is representable as high = low + 1
        // with low = -1.
        let mut low = -1_isize;
        let mut high = sequence.len() as isize;

        while low != high - 1 {
            let mid = (high - low) / 2 + low;
            let candidate = &sequence[mid as usize];

            match (self.compare)(&value, candidate) {
                Ordering::Greater => low = mid,
                Ordering::Less => high = mid,
                Ordering::Equal => {
                    // Equal-key match: stop narrowing and apply the policy
                    // at `mid`. With duplicates allowed, placement is
                    // wherever the search landed, not the leftmost or
                    // rightmost equal element.
                    return match &self.uniqueness {
                        Uniqueness::Unique => replaced(sequence, mid as usize, value),
                        Uniqueness::AllowDuplicates => spliced(sequence, mid as usize, value),
                        Uniqueness::MergeWith(merge) => {
                            let merged = merge(candidate, &value);
                            replaced(sequence, mid as usize, merged)
                        }
                    };
                }
            }
        }

        spliced(sequence, high as usize, value)
    }

    /// Folds `values` into a sorted sequence from an empty seed.
    ///
    /// Equivalent to `values.into_iter().fold(Vec::new(), |sequence, value|
    /// self.insert(&sequence, value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortfold::Inserter;
    ///
    /// let add: Inserter<i32> = Inserter::new();
    /// assert_eq!(add.accumulate([3, 1, 2]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn accumulate<I>(&self, values: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(Vec::new(), |sequence, value| self.insert(&sequence, value))
    }
}

impl<T> std::fmt::Debug for Inserter<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Inserter")
            .field("uniqueness", &self.uniqueness)
            .finish_non_exhaustive()
    }
}

/// Copies `sequence` with the element at `position` replaced by `element`.
fn replaced<T: Clone>(sequence: &[T], position: usize, element: T) -> Vec<T> {
    let mut result = sequence.to_vec();
    result[position] = element;
    result
}

/// Copies `sequence` with `element` spliced in at `position`, shifting the
/// tail right by one. `position == sequence.len()` appends.
fn spliced<T: Clone>(sequence: &[T], position: usize, element: T) -> Vec<T> {
    let mut result = Vec::with_capacity(sequence.len() + 1);
    result.extend_from_slice(&sequence[..position]);
    result.push(element);
    result.extend_from_slice(&sequence[position..]);
    result
}

static_assertions::assert_impl_all!(Inserter<i32>: Send, Sync);
static_assertions::assert_impl_all!(ConfigurationError: std::error::Error, Send, Sync);
