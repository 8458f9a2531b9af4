//! `ObjectPool<T>` — an ordered, growable container of game entities.
//!
//! Entities are opaque to the pool: it never inspects or validates them and
//! they have no identity beyond their current index.

/// Ordered entity storage with in-place update-and-filter traversal.
#[derive(Debug, Clone)]
pub struct ObjectPool<T> {
    items: Vec<T>,
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ObjectPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Append `item` and return a reference to it for chained setup.
    pub fn add(&mut self, item: T) -> &mut T {
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Visit every entity from the last index to the first, removing each one
    /// for which `should_remove` returns `true` immediately after its visit.
    ///
    /// `visit` may mutate the entity (including setting a removal marker that
    /// `should_remove` then reads).  Walking backwards means a removal only
    /// shifts entities that have already been visited, so nothing is skipped
    /// or visited twice and survivors keep their relative order.
    pub fn for_each_and_remove_if<V, P>(&mut self, mut visit: V, mut should_remove: P)
    where
        V: FnMut(&mut T, usize),
        P: FnMut(&T, usize) -> bool,
    {
        for i in (0..self.items.len()).rev() {
            visit(&mut self.items[i], i);
            if should_remove(&self.items[i], i) {
                self.items.remove(i);
            }
        }
    }

    /// Reverse traversal without removal.
    pub fn for_each_rev<V>(&mut self, visit: V)
    where
        V: FnMut(&mut T, usize),
    {
        self.for_each_and_remove_if(visit, |_, _| false);
    }

    /// Reverse traversal that only removes.
    pub fn remove_if<P>(&mut self, should_remove: P)
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.for_each_and_remove_if(|_, _| {}, should_remove);
    }

    /// Remove every entity.  Other pools are unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for ObjectPool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a ObjectPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
