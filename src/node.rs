//! Singly-linked list cell.
//!
//! [`Node`] is the storage primitive behind [`PrimeSet`](crate::PrimeSet).
//! Each node exclusively owns its successor, so a chain of nodes is a
//! forward-only, acyclic sequence with exactly one owner per node.

/// An owning link to the next node of a chain, or `None` at the end.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single cell of a singly-linked chain.
///
/// A node holds one value and owns the rest of the chain through its `next`
/// link. It performs no validation; ordering and uniqueness are maintained by
/// the collection that owns the chain.
///
/// # Examples
///
/// ```rust
/// use primeset::Node;
///
/// let tail = Node::new(7, None);
/// let head = Node::new(5, Some(Box::new(tail)));
///
/// assert_eq!(*head.value(), 5);
/// assert_eq!(head.next().map(Node::value), Some(&7));
/// ```
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node holding `value` and owning `next`.
    #[inline]
    #[must_use]
    pub const fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }

    /// Returns a reference to the stored value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Returns the next node, if any.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Returns a mutable reference to the link holding the next node.
    #[inline]
    pub fn next_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }

    /// Replaces the next link, dropping whatever it previously owned.
    #[inline]
    pub fn set_next(&mut self, next: Link<T>) {
        self.next = next;
    }

    /// Detaches and returns the rest of the chain, leaving this node as a tail.
    #[inline]
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_node_has_no_successor() {
        let node = Node::new(3, None);
        assert_eq!(*node.value(), 3);
        assert!(node.next().is_none());
    }

    #[rstest]
    fn set_value_replaces_value() {
        let mut node = Node::new(3, None);
        node.set_value(11);
        assert_eq!(*node.value(), 11);
    }

    #[rstest]
    fn set_next_links_successor() {
        let mut node = Node::new(3, None);
        node.set_next(Some(Box::new(Node::new(5, None))));
        assert_eq!(node.next().map(Node::value), Some(&5));
    }

    #[rstest]
    fn take_next_detaches_rest_of_chain() {
        let mut node = Node::new(3, Some(Box::new(Node::new(5, None))));
        let rest = node.take_next();

        assert!(node.next().is_none());
        assert_eq!(rest.as_deref().map(Node::value), Some(&5));
    }

    #[rstest]
    fn next_mut_allows_splicing() {
        let mut node = Node::new(3, Some(Box::new(Node::new(7, None))));
        let rest = node.next_mut().take();
        *node.next_mut() = Some(Box::new(Node::new(5, rest)));

        let values: Vec<i32> = std::iter::successors(Some(&node), |node| node.next())
            .map(|node| *node.value())
            .collect();
        assert_eq!(values, vec![3, 5, 7]);
    }
}
