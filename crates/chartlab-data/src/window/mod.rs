//! Fixed-capacity FIFO window over streamed samples

use std::collections::VecDeque;

/// Bounded FIFO buffer; pushing past capacity drops the oldest entry
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        self.buf.push_back(item);
        while self.buf.len() > self.capacity {
            self.buf.pop_front();
        }
    }

    /// Change capacity; shrinking drops the oldest entries
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.buf.len() > capacity {
            self.buf.pop_front();
        }
    }

    /// Insert older entries before the current front, oldest first, without
    /// exceeding capacity
    pub fn prepend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for item in items.into_iter().rev() {
            if self.buf.len() >= self.capacity {
                break;
            }
            self.buf.push_front(item);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn front(&self) -> Option<&T> {
        self.buf.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.buf.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut window = SlidingWindow::new(3);
        for i in 0..5 {
            window.push(i);
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_shrink_truncates_front() {
        let mut window = SlidingWindow::new(5);
        for i in 0..5 {
            window.push(i);
        }
        window.set_capacity(2);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(window.capacity(), 2);
    }

    #[test]
    fn test_grow_preserves_contents() {
        let mut window = SlidingWindow::new(2);
        window.push(1);
        window.push(2);
        window.set_capacity(10);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        window.push(3);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_prepend_fills_up_to_capacity() {
        let mut window = SlidingWindow::new(4);
        window.push(10);
        window.push(11);
        window.prepend(vec![6, 7, 8, 9]);
        assert_eq!(window.len(), 4);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_front_back() {
        let mut window = SlidingWindow::new(3);
        assert!(window.is_empty());
        window.push(1);
        window.push(2);
        assert_eq!(window.front(), Some(&1));
        assert_eq!(window.back(), Some(&2));
        window.clear();
        assert!(window.is_empty());
    }
}
