//! # primeset
//!
//! An ordered set of odd prime integers backed by a singly-linked list.
//!
//! ## Overview
//!
//! - [`Node`]: a singly-linked cell that exclusively owns its successor
//! - [`PrimeSet`]: the ordered-set engine, kept strictly ascending with no
//!   duplicates, supporting membership, insertion, removal and set algebra
//!   (subset, equality, intersection, union, difference)
//! - [`ParsePrimeSetError`]: returned when parsing the `{3,5,7}` rendering
//!
//! Invalid input never fails: adding a non-prime or a duplicate, or removing
//! an absent value, leaves the set unchanged.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`PrimeSet`] as a sequence of integers
//!
//! ## Example
//!
//! ```rust
//! use primeset::PrimeSet;
//!
//! let mut primes = PrimeSet::new();
//! for value in [3, 7, 5, 9, 2] {
//!     primes.add_to_prime_set(value);
//! }
//! assert_eq!(primes.to_string(), "{3,5,7}");
//!
//! let parsed: PrimeSet = "{5}".parse().unwrap();
//! assert_eq!(primes.intersection(&parsed).to_string(), "{5}");
//! assert_eq!(primes.difference(&parsed).to_string(), "{3,7}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod node;
mod primality;
pub mod prime_set;

pub use error::ParsePrimeSetError;
pub use node::{Link, Node};
pub use prime_set::{IntoIter, Iter, PrimeSet};
