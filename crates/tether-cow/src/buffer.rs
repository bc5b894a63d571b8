//! The copy-on-write buffer.

use std::fmt;
use std::sync::Arc;

use tether_core::CowError;
use tracing::debug;

/// A growable sequence with value semantics and shared storage.
///
/// Cloning a `CowBuffer` is O(1): both handles point at the same storage.
/// The first mutation through a handle whose storage is shared copies the
/// elements into a private allocation; mutations through a handle that
/// already owns its storage alone happen in place.
///
/// Uniqueness is checked through `&mut self`, so the check and the write
/// that follows it cannot be separated by another handle's mutation.
pub struct CowBuffer<T = i64> {
    storage: Arc<Vec<T>>,
}

impl<T> CowBuffer<T> {
    /// Wrap `initial` in freshly allocated, uniquely owned storage.
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            storage: Arc::new(initial),
        }
    }

    /// Borrow the current contents.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Whether this handle is the only one observing its storage.
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.storage) == 1
    }

    /// Number of handles currently sharing this handle's storage.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.storage)
    }

    /// Whether `self` and `other` currently observe the same storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Number of elements the current storage can hold without growing.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
}

impl<T: Clone> CowBuffer<T> {
    /// Append `element`, cloning the storage first if it is shared.
    ///
    /// # Errors
    ///
    /// [`CowError::AllocationFailed`] if the private clone or the growth
    /// cannot be reserved. The buffer is unchanged in that case.
    pub fn push(&mut self, element: T) -> Result<(), CowError> {
        self.make_unique(1)?.push(element);
        Ok(())
    }

    /// Append every element of `items`, cloning the storage first if shared.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), CowError> {
        self.make_unique(items.len())?.extend_from_slice(items);
        Ok(())
    }

    /// Ensure room for `additional` more elements without further growth.
    ///
    /// A shared buffer is privatised by this call.
    pub fn reserve(&mut self, additional: usize) -> Result<(), CowError> {
        self.make_unique(additional)?;
        Ok(())
    }

    /// Remove every element.
    ///
    /// A shared buffer is detached onto new empty storage instead of
    /// copying elements only to drop them.
    pub fn clear(&mut self) {
        match Arc::get_mut(&mut self.storage) {
            Some(items) => items.clear(),
            None => self.storage = Arc::new(Vec::new()),
        }
    }

    /// An owned copy of the current contents.
    ///
    /// Does not change sharing.
    pub fn snapshot(&self) -> Vec<T> {
        self.storage.as_ref().clone()
    }

    /// Take the contents, copying only if another handle still shares them.
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.storage).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Make this handle the sole owner of storage with room for
    /// `additional` more elements, and return it for writing.
    fn make_unique(&mut self, additional: usize) -> Result<&mut Vec<T>, CowError> {
        let len = self.storage.len();
        let requested = len
            .checked_add(additional)
            .ok_or(CowError::AllocationFailed {
                requested: usize::MAX,
            })?;

        if Arc::get_mut(&mut self.storage).is_none() {
            let mut fresh = Vec::new();
            fresh
                .try_reserve_exact(requested)
                .map_err(|_| CowError::AllocationFailed { requested })?;
            fresh.extend_from_slice(&self.storage);
            debug!(
                len,
                sharers = Arc::strong_count(&self.storage),
                "cloned shared storage before write"
            );
            self.storage = Arc::new(fresh);
        }

        // Unique at this point, so this never clones.
        let items = Arc::make_mut(&mut self.storage);
        items
            .try_reserve(additional)
            .map_err(|_| CowError::AllocationFailed { requested })?;
        Ok(items)
    }
}

impl<T> Clone for CowBuffer<T> {
    /// A new handle sharing this one's storage. Never allocates.
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T> Default for CowBuffer<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for CowBuffer<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for CowBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for CowBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for CowBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for CowBuffer<T> {}

impl<T: fmt::Debug> fmt::Debug for CowBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_then_push_leaves_source_untouched() {
        let x = CowBuffer::new(vec![1, 2, 3]);
        let mut y = x.clone();
        assert!(x.shares_storage_with(&y));

        y.push(9).unwrap();
        assert_eq!(x.snapshot(), vec![1, 2, 3]);
        assert_eq!(y.snapshot(), vec![1, 2, 3, 9]);
        assert!(!x.shares_storage_with(&y));
        assert!(x.is_unique());
        assert!(y.is_unique());
    }

    #[test]
    fn push_onto_empty() {
        let mut b: CowBuffer = CowBuffer::new(vec![]);
        b.push(5).unwrap();
        assert_eq!(b.snapshot(), vec![5]);
    }

    #[test]
    fn unique_push_keeps_storage() {
        let mut b = CowBuffer::new(Vec::with_capacity(4));
        b.push(1).unwrap();
        let before = b.as_slice().as_ptr();
        b.push(2).unwrap();
        assert_eq!(b.as_slice().as_ptr(), before);
    }

    #[test]
    fn clone_shares_and_counts() {
        let a: CowBuffer = vec![1].into();
        let b = a.clone();
        let c = b.clone();
        assert_eq!(a.share_count(), 3);
        assert!(!a.is_unique());
        drop(c);
        assert_eq!(b.share_count(), 2);
    }

    #[test]
    fn only_the_writer_is_detached() {
        let a: CowBuffer = vec![1, 2].into();
        let mut b = a.clone();
        let c = a.clone();
        b.push(3).unwrap();
        assert!(a.shares_storage_with(&c));
        assert_eq!(a.share_count(), 2);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(c.as_slice(), &[1, 2]);
    }

    #[test]
    fn extend_and_reserve_follow_cow() {
        let a: CowBuffer = vec![1].into();
        let mut b = a.clone();
        b.extend_from_slice(&[2, 3]).unwrap();
        assert_eq!(a.snapshot(), vec![1]);
        assert_eq!(b.snapshot(), vec![1, 2, 3]);

        let mut c = a.clone();
        c.reserve(10).unwrap();
        assert!(c.is_unique());
        assert!(c.capacity() >= 11);
        assert_eq!(a, c);
    }

    #[test]
    fn clear_detaches_shared_storage() {
        let a: CowBuffer = vec![1, 2].into();
        let mut b = a.clone();
        b.clear();
        assert!(b.is_empty());
        assert_eq!(a.len(), 2);

        let mut solo: CowBuffer = vec![7].into();
        solo.clear();
        assert!(solo.is_empty());
    }

    #[test]
    fn into_vec_copies_only_when_shared() {
        let a: CowBuffer = vec![4, 5].into();
        let b = a.clone();
        assert_eq!(b.into_vec(), vec![4, 5]);
        assert!(a.is_unique());
        assert_eq!(a.into_vec(), vec![4, 5]);
    }

    #[test]
    fn equality_is_by_contents() {
        let a: CowBuffer = vec![1, 2].into();
        let b: CowBuffer = [1, 2].into_iter().collect();
        assert_eq!(a, b);
        assert!(!a.shares_storage_with(&b));
        assert_eq!(format!("{a:?}"), "[1, 2]");
    }

    #[test]
    fn generic_elements() {
        let a = CowBuffer::new(vec![String::from("x")]);
        let mut b = a.clone();
        b.push(String::from("y")).unwrap();
        assert_eq!(a.as_slice(), &["x".to_string()]);
        assert_eq!(b.len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn writes_never_leak_across_handles(
                initial in proptest::collection::vec(any::<i64>(), 0..16),
                ops in proptest::collection::vec((0usize..4, any::<i64>()), 0..40),
            ) {
                // Four handles that all start from one storage, checked
                // against four independent Vecs.
                let base = CowBuffer::new(initial.clone());
                let mut handles = vec![base.clone(), base.clone(), base.clone(), base];
                let mut model = vec![initial.clone(); 4];

                for &(which, value) in &ops {
                    handles[which].push(value).unwrap();
                    model[which].push(value);
                    prop_assert!(handles[which].is_unique());
                }
                for (h, m) in handles.iter().zip(&model) {
                    prop_assert_eq!(h.as_slice(), m.as_slice());
                }
            }
        }
    }
}
