//! # sortfold
//!
//! Persistent-style construction of sorted sequences, one insertion at a time.
//!
//! ## Overview
//!
//! This library provides a single building block: an [`Inserter`] that takes
//! an existing sorted, immutable sequence and a new value and returns a brand
//! new sorted sequence containing the value. The input is never mutated, so
//! the previous version stays valid — the natural fit is a fold over a stream
//! of values, threading each result forward:
//!
//! - **Pluggable ordering**: a two-argument comparator, a key extractor, or
//!   the natural order on the element type.
//! - **Duplicate policies**: replace (last write wins), merge through a
//!   combinator, or keep every duplicate.
//! - **Logarithmic search**: the insertion point is found by binary search;
//!   materializing the result is a plain O(n) copy, the accepted price of
//!   immutability.
//!
//! ## Example
//!
//! ```rust
//! use sortfold::prelude::*;
//!
//! let add: Inserter<i32> = Inserter::new();
//! let sorted = [10, 59, 34, 93, 9, 310, 93, 29]
//!     .into_iter()
//!     .fold(Vec::new(), |sequence, value| add.insert(&sequence, value));
//!
//! assert_eq!(sorted, vec![9, 10, 29, 34, 59, 93, 310]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use sortfold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::inserter::*;
    pub use crate::ordering::*;
}

pub mod inserter;
pub mod ordering;

pub use inserter::ConfigurationError;
pub use inserter::Inserter;
pub use inserter::InserterBuilder;
pub use inserter::Merge;
pub use inserter::Uniqueness;
pub use ordering::Comparator;
