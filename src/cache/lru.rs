//! Recency List Module
//!
//! Implements the recency-ordered sequence used for LRU eviction.

// == Node Id ==
/// Stable handle to an item stored in a [`RecencyList`].
///
/// A handle stays valid until its item is removed. After that the slot may be
/// reused, so callers must drop handles together with the items they name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Doubly linked list of items ordered by recency of use.
///
/// Nodes live in a slab (`Vec<Option<Node>>`) and link to each other by
/// index, so every operation below is O(1) without unsafe code:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct RecencyList<T> {
    nodes: Vec<Option<Node<T>>>,
    /// Vacant slots available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Front ==
    /// Inserts an item as the most recently used and returns its handle.
    pub fn push_front(&mut self, item: T) -> NodeId {
        let node = Node {
            item,
            prev: None,
            next: None,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        NodeId(idx)
    }

    // == Move To Front ==
    /// Marks an item as recently used.
    ///
    /// Returns false if the handle does not name a live item.
    pub fn move_to_front(&mut self, id: NodeId) -> bool {
        if self.node(id.0).is_none() {
            return false;
        }
        if self.head != Some(id.0) {
            self.unlink(id.0);
            self.link_front(id.0);
        }
        true
    }

    // == Remove ==
    /// Removes an item from the list and returns it.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.node(id.0)?;
        self.unlink(id.0);

        let node = self.nodes[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.item)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(NodeId(tail))
    }

    // == Peek ==
    /// Returns the least recently used item without removing it.
    #[cfg(test)]
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.node(idx)).map(|node| &node.item)
    }

    /// Returns the most recently used item.
    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.node(idx)).map(|node| &node.item)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id.0).map(|node| &node.item)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id.0).map(|node| &mut node.item)
    }

    // == Length ==
    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every item and releases the slab.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iterate ==
    /// Iterates from most to least recently used, yielding each handle with its item.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches a node from its neighbours, leaving it in its slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
    }

    /// Attaches a detached node at the front.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head_node) => head_node.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node(idx)?;
        self.cursor = node.next;
        Some((NodeId(idx), &node.item))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn drain_back_to_front<T>(list: &mut RecencyList<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(item) = list.pop_back() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_push_front_orders_by_insertion() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(list.back(), Some(&"key1"));
        assert_eq!(list.front(), Some(&"key3"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert!(list.move_to_front(a));

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"b"));
        assert_eq!(drain_back_to_front(&mut list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");

        assert!(list.move_to_front(b));
        assert_eq!(drain_back_to_front(&mut list), vec!["a", "b"]);
    }

    #[test]
    fn test_move_to_front_of_middle() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        list.move_to_front(b);

        let order: Vec<_> = list.iter().map(|(_, item)| *item).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_pop_back_empty() {
        let mut list: RecencyList<u32> = RecencyList::new();
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        let key2 = list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.remove(key2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(key2), None);
        assert_eq!(drain_back_to_front(&mut list), vec!["key1", "key3"]);
    }

    #[test]
    fn test_remove_twice_returns_none() {
        let mut list = RecencyList::new();
        let id = list.push_front(1);

        assert_eq!(list.remove(id), Some(1));
        assert_eq!(list.remove(id), None);
        assert!(!list.move_to_front(id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_single_item_head_and_tail() {
        let mut list = RecencyList::new();
        let id = list.push_front("only");

        assert_eq!(list.front(), Some(&"only"));
        assert_eq!(list.back(), Some(&"only"));

        list.remove(id);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);

        let a = list.push_front("a");
        list.push_front("b");
        list.remove(a);
        let c = list.push_front("c");

        // The vacated slot is handed out again
        assert_eq!(a, c);
        assert_eq!(list.get(c), Some(&"c"));
        assert_eq!(drain_back_to_front(&mut list), vec!["b", "c"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::new();
        let id = list.push_front(10);

        if let Some(item) = list.get_mut(id) {
            *item = 20;
        }

        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);

        list.push_front(3);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        // front=[b, c, a]=back
        assert_eq!(drain_back_to_front(&mut list), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_iter_yields_handles() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");

        let handles: Vec<_> = list.iter().map(|(id, _)| id).collect();
        assert_eq!(handles, vec![b, a]);
    }
}
