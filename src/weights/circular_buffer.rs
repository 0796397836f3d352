use std::fmt;

/// Fixed-capacity ring that drops its oldest item once full.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    buffer: Vec<T>,
    write_pos: usize,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            write_pos: 0,
            capacity,
        }
    }

    /// Appends `item`, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.buffer.len() < self.capacity {
            self.buffer.push(item);
            None
        } else {
            Some(std::mem::replace(&mut self.buffer[self.write_pos], item))
        };
        self.write_pos = (self.write_pos + 1) % self.capacity;
        evicted
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let head = if self.buffer.len() < self.capacity {
            0
        } else {
            self.write_pos
        };

        self.buffer[head..].iter().chain(&self.buffer[..head])
    }

    pub fn last(&self) -> Option<&T> {
        if self.buffer.is_empty() {
            return None;
        }
        let pos = (self.write_pos + self.capacity - 1) % self.capacity;
        self.buffer.get(pos)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.write_pos = 0;
    }

    pub fn as_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_newest_in_order() {
        let mut buf = CircularBuffer::new(3);
        assert_eq!(buf.push(1), None);
        assert_eq!(buf.push(2), None);
        assert_eq!(buf.push(3), None);
        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.push(5), Some(2));
        assert_eq!(buf.as_vec(), vec![3, 4, 5]);
        assert_eq!(buf.last(), Some(&5));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_partial_fill_and_clear() {
        let mut buf = CircularBuffer::new(4);
        buf.push("a");
        buf.push("b");
        assert_eq!(buf.as_vec(), vec!["a", "b"]);
        assert_eq!(buf.last(), Some(&"b"));

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.last(), None);
        buf.push("c");
        assert_eq!(buf.as_vec(), vec!["c"]);
    }
}
