//! Insertion-ordered list kept sorted ascending by rank.
//!
//! Items live in an arena and are chained by index, so an insertion walks the
//! chain to its position and relinks one slot instead of shifting the rest.
//! A new item goes in front of the first item whose rank is greater than or
//! equal to its own, which puts the newest of several equal ranks first.

use crate::song::Ranked;

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    next: Option<usize>,
}

/// Singly linked, rank-ordered collection.
#[derive(Debug, Clone)]
pub struct RankedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> Default for RankedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }
}

impl<T: Ranked> RankedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one item, keeping the list sorted. O(len).
    pub fn insert(&mut self, item: T) {
        let rank = item.rank();

        let mut prev = None;
        let mut cur = self.head;
        while let Some(i) = cur {
            if self.nodes[i].item.rank() >= rank {
                break;
            }
            prev = Some(i);
            cur = self.nodes[i].next;
        }

        let slot = self.nodes.len();
        self.nodes.push(Node { item, next: cur });
        match prev {
            Some(p) => self.nodes[p].next = Some(slot),
            None => self.head = Some(slot),
        }
    }
}

impl<T> RankedList<T> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Items in rank order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    /// The first `min(n, len)` items in rank order. Each call is a fresh traversal.
    pub fn take(&self, n: usize) -> std::iter::Take<Iter<'_, T>> {
        self.iter().take(n)
    }
}

impl<T: Ranked> Extend<T> for RankedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ranked> FromIterator<T> for RankedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward traversal over a `RankedList`.
pub struct Iter<'a, T> {
    list: &'a RankedList<T>,
    cur: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rank plus an arrival tag to tell equal ranks apart
    #[derive(Debug, Clone, PartialEq)]
    struct Item(f64, &'static str);

    impl Ranked for Item {
        fn rank(&self) -> f64 {
            self.0
        }
    }

    fn ranks(list: &RankedList<Item>) -> Vec<f64> {
        list.iter().map(|i| i.0).collect()
    }

    fn tags(list: &RankedList<Item>) -> Vec<&'static str> {
        list.iter().map(|i| i.1).collect()
    }

    #[test]
    fn empty_list() {
        let list: RankedList<Item> = RankedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.take(5).count(), 0);
    }

    #[test]
    fn sorts_unsorted_input() {
        let list: RankedList<Item> = [0.9, 0.2, 0.5, 0.7, 0.1, 0.3]
            .into_iter()
            .map(|r| Item(r, ""))
            .collect();
        assert_eq!(ranks(&list), vec![0.1, 0.2, 0.3, 0.5, 0.7, 0.9]);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn stays_sorted_after_every_insert() {
        let input = [5.0, 3.0, 8.0, 3.0, 1.0, 9.0, 5.0, 0.0, 7.0, 2.0, 2.0, 6.0];
        let mut list = RankedList::new();
        for (n, r) in input.iter().enumerate() {
            list.insert(Item(*r, ""));
            let current = ranks(&list);
            assert_eq!(current.len(), n + 1);
            assert!(current.windows(2).all(|w| w[0] <= w[1]), "unsorted: {:?}", current);
        }
    }

    #[test]
    fn new_item_goes_before_equal_rank() {
        let mut list = RankedList::new();
        list.insert(Item(1.0, "a"));
        list.insert(Item(2.0, "b"));
        list.insert(Item(2.0, "c"));
        assert_eq!(tags(&list), vec!["a", "c", "b"]);

        list.insert(Item(2.0, "new"));
        assert_eq!(tags(&list), vec!["a", "new", "c", "b"]);
        assert_eq!(ranks(&list), vec![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn new_head_and_new_tail() {
        let mut list = RankedList::new();
        list.insert(Item(5.0, "mid"));
        list.insert(Item(1.0, "head"));
        list.insert(Item(9.0, "tail"));
        assert_eq!(tags(&list), vec!["head", "mid", "tail"]);
    }

    #[test]
    fn all_equal_ranks_reverse_arrival() {
        let list: RankedList<Item> = ["first", "second", "third"]
            .into_iter()
            .map(|t| Item(0.0, t))
            .collect();
        assert_eq!(tags(&list), vec!["third", "second", "first"]);
    }

    #[test]
    fn take_is_bounded() {
        let list: RankedList<Item> = [3.0, 1.0, 2.0].into_iter().map(|r| Item(r, "")).collect();
        assert_eq!(list.take(0).count(), 0);
        assert_eq!(list.take(2).map(|i| i.0).collect::<Vec<_>>(), vec![1.0, 2.0]);
        assert_eq!(list.take(3).count(), 3);
        assert_eq!(list.take(100).count(), 3);
    }

    #[test]
    fn take_does_not_consume() {
        let list: RankedList<Item> = [0.4, 0.6, 0.5].into_iter().map(|r| Item(r, "")).collect();
        let first: Vec<_> = list.take(2).cloned().collect();
        let second: Vec<_> = list.take(2).cloned().collect();
        assert_eq!(first, second);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn negative_ranks_sort_first() {
        let list: RankedList<Item> = [0.0, -3.5, 2.0, -1.0].into_iter().map(|r| Item(r, "")).collect();
        assert_eq!(ranks(&list), vec![-3.5, -1.0, 0.0, 2.0]);
    }

    #[test]
    fn extend_keeps_order_across_batches() {
        let mut list: RankedList<Item> = [4.0, 2.0].into_iter().map(|r| Item(r, "")).collect();
        list.extend([3.0, 1.0].into_iter().map(|r| Item(r, "")));
        assert_eq!(ranks(&list), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!((&list).into_iter().count(), 4);
    }
}
