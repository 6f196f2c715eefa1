//! Ordered set of odd primes stored in a singly-linked chain.
//!
//! This module provides [`PrimeSet`], a duplicate-free collection of odd
//! prime `i32` values kept in strictly ascending order at all times.
//!
//! # Overview
//!
//! `PrimeSet` owns a chain of [`Node`]s through single-owner links:
//! - Mutators (`add_to_prime_set`, `remove_from_prime_set`) walk to the
//!   splice point and relink exactly one neighbouring link
//! - Set algebra (`sub_set`, `intersection`, `union`, `difference`) runs
//!   merge-style co-walks over two ascending chains
//! - Results of set algebra own brand-new nodes and never alias an operand
//!
//! Invalid input is absorbed: non-primes, duplicates and absent elements
//! turn the corresponding operation into a no-op.
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `is_empty`              | O(1)       |
//! | `num_of_elements`       | O(1)       |
//! | `is_member`             | O(n)       |
//! | `add_to_prime_set`      | O(n + sqrt(x)) |
//! | `remove_from_prime_set` | O(n + sqrt(x)) |
//! | `sub_set`               | O(n + m)   |
//! | `equals`                | O(n + m)   |
//! | `intersection`          | O(n + m)   |
//! | `union`                 | O(n + m)   |
//! | `difference`            | O(n + m)   |
//!
//! # Examples
//!
//! ```rust
//! use primeset::PrimeSet;
//!
//! let mut set = PrimeSet::new();
//! set.add_to_prime_set(7);
//! set.add_to_prime_set(3);
//! set.add_to_prime_set(5);
//! set.add_to_prime_set(9); // composite, ignored
//!
//! assert_eq!(set.to_string(), "{3,5,7}");
//! assert_eq!(set.num_of_elements(), 3);
//!
//! let mut other = PrimeSet::new();
//! other.add_to_prime_set(5);
//!
//! assert!(set.sub_set(&other));
//! assert_eq!(set.difference(&other).to_string(), "{3,7}");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ParsePrimeSetError;
use crate::node::{Link, Node};
use crate::primality::is_odd_prime;

/// Message for the debug assertion guarding bulk chain construction.
const ASCENDING_INVARIANT_PANIC_MESSAGE: &str =
    "chain construction requires strictly increasing elements (sorted + deduplicated)";

/// An ordered set of odd primes backed by a singly-linked chain.
///
/// The chain is kept strictly ascending and `num_of_elements` always equals
/// the number of nodes reachable from the head. Even numbers, including 2,
/// are never members.
///
/// # Examples
///
/// ```rust
/// use primeset::PrimeSet;
///
/// let set: PrimeSet = [11, 3, 4, 7, 3].into_iter().collect();
///
/// assert_eq!(set.to_vec(), vec![3, 7, 11]);
/// assert!(set.is_member(7));
/// assert!(!set.is_member(4));
/// ```
pub struct PrimeSet {
    head: Link<i32>,
    count: usize,
}

static_assertions::assert_impl_all!(PrimeSet: Send, Sync, Clone, Default);

impl PrimeSet {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let set = PrimeSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.to_string(), "{}");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1): the count is maintained by every mutator.
    #[inline]
    #[must_use]
    pub const fn num_of_elements(&self) -> usize {
        self.count
    }

    /// Returns the number of elements in the set.
    ///
    /// Alias of [`num_of_elements`](Self::num_of_elements).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if `value` is a member of the set.
    ///
    /// Even values, 2 included, are never members and return `false` without
    /// walking the chain. Otherwise the walk stops at the first value that is
    /// greater than `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let mut set = PrimeSet::new();
    /// set.add_to_prime_set(13);
    ///
    /// assert!(set.is_member(13));
    /// assert!(!set.is_member(11));
    /// assert!(!set.is_member(2));
    /// ```
    #[must_use]
    pub fn is_member(&self, value: i32) -> bool {
        if value % 2 == 0 {
            return false;
        }

        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            match node.value().cmp(&value) {
                Ordering::Less => cursor = node.next(),
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }

    /// Inserts `value` if it is an odd prime not already in the set.
    ///
    /// The new node is spliced in front of the first element greater than
    /// `value`, or appended at the end. Non-primes and duplicates leave the
    /// set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let mut set = PrimeSet::new();
    /// set.add_to_prime_set(7);
    /// set.add_to_prime_set(3);
    /// set.add_to_prime_set(7);
    /// set.add_to_prime_set(15);
    ///
    /// assert_eq!(set.to_string(), "{3,7}");
    /// ```
    pub fn add_to_prime_set(&mut self, value: i32) {
        if !is_odd_prime(value) {
            trace!(value, "ignoring insertion of a value that is not an odd prime");
            return;
        }

        let link = self.seek_mut(value);
        if link.as_ref().is_some_and(|node| *node.value() == value) {
            return;
        }

        let rest = link.take();
        *link = Some(Box::new(Node::new(value, rest)));
        self.count += 1;
    }

    /// Removes `value` from the set if present.
    ///
    /// Values that are not odd primes, and values absent from the set, leave
    /// it unchanged. The walk stops at the first element greater than `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let mut set: PrimeSet = [3, 5, 7].into_iter().collect();
    /// set.remove_from_prime_set(5);
    /// set.remove_from_prime_set(11);
    ///
    /// assert_eq!(set.to_string(), "{3,7}");
    /// ```
    pub fn remove_from_prime_set(&mut self, value: i32) {
        if !is_odd_prime(value) {
            trace!(value, "ignoring removal of a value that is not an odd prime");
            return;
        }
        if self.is_empty() {
            return;
        }

        let link = self.seek_mut(value);
        if let Some(mut node) = link.take_if(|node| *node.value() == value) {
            *link = node.take_next();
            self.count -= 1;
        }
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Both chains are walked once in lockstep: `self` advances past smaller
    /// values, a match advances both, and running out of `self` or overshooting
    /// the current element of `other` proves `other` is not a subset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let set: PrimeSet = [3, 5, 7].into_iter().collect();
    /// let part: PrimeSet = [5].into_iter().collect();
    ///
    /// assert!(set.sub_set(&part));
    /// assert!(!part.sub_set(&set));
    /// assert!(set.sub_set(&PrimeSet::new()));
    /// ```
    #[must_use]
    pub fn sub_set(&self, other: &Self) -> bool {
        let mut mine = self.head.as_deref();
        let mut theirs = other.head.as_deref();

        while let Some(wanted) = theirs {
            let Some(current) = mine else {
                return false;
            };
            match current.value().cmp(wanted.value()) {
                Ordering::Less => mine = current.next(),
                Ordering::Equal => {
                    mine = current.next();
                    theirs = wanted.next();
                }
                Ordering::Greater => return false,
            }
        }
        true
    }

    /// Returns `true` if both sets hold exactly the same elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let left: PrimeSet = [3, 5].into_iter().collect();
    /// let right: PrimeSet = [5, 3].into_iter().collect();
    ///
    /// assert!(left.equals(&right));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.count == other.count && other.sub_set(self)
    }

    /// Returns a new set holding the elements present in both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let left: PrimeSet = [3, 5, 7, 11].into_iter().collect();
    /// let right: PrimeSet = [5, 11, 13].into_iter().collect();
    ///
    /// assert_eq!(left.intersection(&right).to_string(), "{5,11}");
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        Self::from_ascending(intersection_chains(
            self.head.as_deref(),
            other.head.as_deref(),
        ))
    }

    /// Returns a new set holding every element of either set.
    ///
    /// Elements present in both sets appear once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let left: PrimeSet = [3, 7].into_iter().collect();
    /// let right: PrimeSet = [5, 7].into_iter().collect();
    ///
    /// assert_eq!(left.union(&right).to_string(), "{3,5,7}");
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ascending(merge_chains(self.head.as_deref(), other.head.as_deref()))
    }

    /// Returns a new set holding the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let left: PrimeSet = [3, 5, 7].into_iter().collect();
    /// let right: PrimeSet = [5, 13].into_iter().collect();
    ///
    /// assert_eq!(left.difference(&right).to_string(), "{3,7}");
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_ascending(difference_chains(
            self.head.as_deref(),
            other.head.as_deref(),
        ))
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.head.as_deref().map(|node| *node.value())
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let set: PrimeSet = [7, 3, 5].into_iter().collect();
    /// let values: Vec<i32> = set.iter().collect();
    /// assert_eq!(values, vec![3, 5, 7]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.count,
        }
    }

    /// Returns the elements as an ascending `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Returns the link at which `value` belongs.
    ///
    /// That is the first link that is empty or holds a node whose value is not
    /// smaller than `value`.
    fn seek_mut(&mut self, value: i32) -> &mut Link<i32> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| *node.value() < value) {
            if let Some(node) = cursor {
                cursor = node.next_mut();
            }
        }
        cursor
    }

    /// Builds a set from strictly ascending odd primes by appending at the tail.
    ///
    /// The input must already satisfy the chain invariants; this is checked
    /// with `debug_assert!` in debug builds.
    fn from_ascending<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut set = Self::new();
        let mut count = 0;
        let mut previous: Option<i32> = None;
        let mut tail = &mut set.head;

        for value in values {
            debug_assert!(
                previous.is_none_or(|last| last < value),
                "{}",
                ASCENDING_INVARIANT_PANIC_MESSAGE
            );
            debug_assert!(is_odd_prime(value));
            previous = Some(value);

            tail = tail.insert(Box::new(Node::new(value, None))).next_mut();
            count += 1;
        }

        set.count = count;
        set
    }
}

impl Default for PrimeSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PrimeSet {
    fn clone(&self) -> Self {
        Self::from_ascending(self.iter())
    }
}

impl Drop for PrimeSet {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop can overflow the stack
        // on long chains.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
    }
}

impl PartialEq for PrimeSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PrimeSet {}

impl fmt::Debug for PrimeSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for PrimeSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

impl FromStr for PrimeSet {
    type Err = ParsePrimeSetError;

    /// Parses the textual rendering produced by `Display`.
    ///
    /// Elements may appear in any order and duplicates collapse, but every
    /// element must be an odd prime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::PrimeSet;
    ///
    /// let set: PrimeSet = "{ 7, 3, 5 }".parse().unwrap();
    /// assert_eq!(set.to_string(), "{3,5,7}");
    ///
    /// assert!("{3,4}".parse::<PrimeSet>().is_err());
    /// assert!("3,5".parse::<PrimeSet>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_elements(input).inspect_err(|error| debug!(%error, "failed to parse prime set"))
    }
}

fn parse_elements(input: &str) -> Result<PrimeSet, ParsePrimeSetError> {
    let body = input
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(ParsePrimeSetError::MissingBraces)?;

    let mut set = PrimeSet::new();
    if body.trim().is_empty() {
        return Ok(set);
    }

    for (index, text) in body.split(',').enumerate() {
        let text = text.trim();
        let value = text
            .parse::<i32>()
            .map_err(|source| ParsePrimeSetError::InvalidElement {
                index,
                text: text.to_string(),
                source,
            })?;
        if !is_odd_prime(value) {
            return Err(ParsePrimeSetError::NotAnOddPrime { index, value });
        }
        set.add_to_prime_set(value);
    }
    Ok(set)
}

impl FromIterator<i32> for PrimeSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for PrimeSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add_to_prime_set(value);
        }
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PrimeSet {
    type Item = i32;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the elements of a [`PrimeSet`] in ascending order.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node<i32>>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(*node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over the elements of a [`PrimeSet`] in ascending order.
///
/// Each call to `next` unlinks and frees the head node.
pub struct IntoIter {
    set: PrimeSet,
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.set.head.take()?;
        self.set.head = node.take_next();
        self.set.count -= 1;
        Some(*node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.count, Some(self.set.count))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

// =============================================================================
// Chain co-walks
// =============================================================================

/// Merges two ascending chains into an ascending, deduplicated `Vec`.
///
/// # Complexity
///
/// O(n + m) where n and m are the chain lengths.
fn merge_chains(mut left: Option<&Node<i32>>, mut right: Option<&Node<i32>>) -> Vec<i32> {
    let mut result = Vec::new();

    while let (Some(left_node), Some(right_node)) = (left, right) {
        match left_node.value().cmp(right_node.value()) {
            Ordering::Less => {
                result.push(*left_node.value());
                left = left_node.next();
            }
            Ordering::Greater => {
                result.push(*right_node.value());
                right = right_node.next();
            }
            Ordering::Equal => {
                result.push(*left_node.value());
                left = left_node.next();
                right = right_node.next();
            }
        }
    }

    // Tail: at most one side still has nodes
    let rest = left.or(right);
    result.extend(std::iter::successors(rest, |node| node.next()).map(|node| *node.value()));
    result
}

/// Collects the values of the `left` chain that do not appear in the `right` chain.
///
/// # Complexity
///
/// O(n + m) where n and m are the chain lengths.
fn difference_chains(mut left: Option<&Node<i32>>, mut right: Option<&Node<i32>>) -> Vec<i32> {
    let mut result = Vec::new();

    while let (Some(left_node), Some(right_node)) = (left, right) {
        match left_node.value().cmp(right_node.value()) {
            Ordering::Less => {
                result.push(*left_node.value());
                left = left_node.next();
            }
            Ordering::Greater => right = right_node.next(),
            Ordering::Equal => {
                left = left_node.next();
                right = right_node.next();
            }
        }
    }

    // Remaining left values are all in the difference
    result.extend(std::iter::successors(left, |node| node.next()).map(|node| *node.value()));
    result
}

/// Collects the values present in both ascending chains.
///
/// # Complexity
///
/// O(n + m) where n and m are the chain lengths.
fn intersection_chains(mut left: Option<&Node<i32>>, mut right: Option<&Node<i32>>) -> Vec<i32> {
    let mut result = Vec::new();

    while let (Some(left_node), Some(right_node)) = (left, right) {
        match left_node.value().cmp(right_node.value()) {
            Ordering::Less => left = left_node.next(),
            Ordering::Greater => right = right_node.next(),
            Ordering::Equal => {
                result.push(*left_node.value());
                left = left_node.next();
                right = right_node.next();
            }
        }
    }

    result
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PrimeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PrimeSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for PrimeSetVisitor {
    type Value = PrimeSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = PrimeSet::new();
        while let Some(value) = seq.next_element::<i32>()? {
            set.add_to_prime_set(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrimeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PrimeSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
