//! Ordering functions for sorted insertion.
//!
//! An [`Inserter`](crate::inserter::Inserter) decides where a value belongs by
//! asking a [`Comparator`] how the probe value relates to a candidate element
//! already in the sequence. This module provides the two stock ways of
//! obtaining one: the natural order of the element type ([`natural`]) and an
//! order derived from a key extractor ([`comparing`]).
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sortfold::ordering::{comparing, natural};
//!
//! let by_value = natural::<i32>();
//! assert_eq!(by_value(&1, &2), Ordering::Less);
//!
//! let by_first = comparing(|entry: &(i32, &str)| entry.0);
//! assert_eq!(by_first(&(5, "eggplant"), &(5, "date")), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A total order over `T`, boxed for storage inside an `Inserter`.
///
/// The comparator is called as `compare(probe, candidate)` where `probe` is
/// the value being inserted and `candidate` is an element already in the
/// sequence: [`Ordering::Greater`] means the probe sorts after the candidate,
/// [`Ordering::Equal`] means the two share an equivalence class, and
/// [`Ordering::Less`] means the probe sorts before the candidate.
///
/// The function must be a valid total order — antisymmetric, transitive, and
/// deterministic across calls with equal inputs. Insertion behavior under an
/// invalid order is undefined (the search is not required to detect it).
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Returns the natural-order comparator for an [`Ord`] element type.
///
/// This is the ordering an [`Inserter`](crate::inserter::Inserter) falls back
/// to when neither an explicit comparator nor a key extractor is configured.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use sortfold::ordering::natural;
///
/// let compare = natural::<i32>();
/// assert_eq!(compare(&3, &1), Ordering::Greater);
/// assert_eq!(compare(&3, &3), Ordering::Equal);
/// ```
#[must_use]
pub fn natural<T: Ord>() -> Comparator<T> {
    Box::new(|probe: &T, candidate: &T| probe.cmp(candidate))
}

/// Derives a comparator from a pure key extractor.
///
/// The extracted keys are compared with the natural order on `K`. The
/// extractor is called once per operand on every comparison, so it should be
/// cheap; it must also be pure, or the derived order is not a total order and
/// insertion behavior becomes undefined.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use sortfold::ordering::comparing;
///
/// let by_id = comparing(|entry: &(u32, String)| entry.0);
/// let apple = (4, "apple".to_string());
/// let banana = (6, "banana".to_string());
/// assert_eq!(by_id(&apple, &banana), Ordering::Less);
/// ```
#[must_use]
pub fn comparing<T, K, F>(extract: F) -> Comparator<T>
where
    K: Ord,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Box::new(move |probe: &T, candidate: &T| extract(probe).cmp(&extract(candidate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::probe_before(1, 2, Ordering::Less)]
    #[case::probe_equal(2, 2, Ordering::Equal)]
    #[case::probe_after(3, 2, Ordering::Greater)]
    fn test_natural_compares_probe_against_candidate(
        #[case] probe: i32,
        #[case] candidate: i32,
        #[case] expected: Ordering,
    ) {
        let compare = natural::<i32>();
        assert_eq!(compare(&probe, &candidate), expected);
    }

    #[rstest]
    fn test_comparing_orders_by_extracted_key_only() {
        let by_first = comparing(|entry: &(i32, &str)| entry.0);

        assert_eq!(by_first(&(3, "carrot"), &(4, "apple")), Ordering::Less);
        assert_eq!(by_first(&(5, "eggplant"), &(5, "date")), Ordering::Equal);
        assert_eq!(by_first(&(6, "banana"), &(5, "date")), Ordering::Greater);
    }

    #[rstest]
    fn test_comparing_agrees_with_explicit_comparator() {
        let derived = comparing(|entry: &(i32, i32)| entry.0);
        let explicit: Comparator<(i32, i32)> =
            Box::new(|probe, candidate| probe.0.cmp(&candidate.0));

        let pairs = [(1, 10), (2, 20), (2, 99), (7, 0)];
        for probe in &pairs {
            for candidate in &pairs {
                assert_eq!(derived(probe, candidate), explicit(probe, candidate));
            }
        }
    }
}
