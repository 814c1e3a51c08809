//! A simple implementation of a Bloom filter, a space-efficient probabilistic
//! data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives. A false negative, on
//! the other hand, can never occur.
//!
//! The provided implementation is sized explicitly: the caller picks `m`, the
//! length of the bit array, and `k`, the number of probe indices computed per
//! element. Items are turned into bytes through the [`Encode`] trait, so any
//! type with a canonical byte form can be used as a filter key.
//!
//! # Double Hashing
//!
//! Double hashing is used to set bit positions within the bit array. The
//! choice for double hashing was shown to be effective without any loss in
//! the asymptotic false positive probability, leading to less computation and
//! potentially less need for randomness in practice, by Adam Kirsch and
//! Michael Mitzenmacher in a paper called *Less Hashing, Same Performance:
//! Building a Better Bloom Filter*.
//!
//! The probe derivation takes the form of the following formula:
//!
//! g<sub>i</sub>(x) = (h<sub>1</sub>(x) + ih<sub>2</sub>(x)) mod m, where
//! h<sub>1</sub> and h<sub>2</sub> are 31-bit values taken big-endian from
//! the first 8 bytes of a SipHash digest of the element's encoding.
//!
//! # Example
//!
//! ```
//! use bloomer::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1024, 3)?;
//!
//! filter.put(&"foo")?;
//! filter.put(&"bar")?;
//!
//! assert!(filter.probably_contains(&"foo")?);
//! assert!(filter.probably_contains(&"bar")?);
//! # Ok::<(), bloomer::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod encode;
pub mod error;

pub use bloom::BloomFilter;
pub use encode::Encode;
pub use error::Error;
