//! Reference-counted heap payloads.
//!
//! `Heap<T>` has a constructor visible only inside the value module, so heap
//! values can only be created through the factory methods on `Value`.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, immutable heap allocation behind a `Value`.
///
/// Single-threaded (`Rc`): the runtime never shares values across threads.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Take the payload if this is the last reference to it.
    #[inline]
    pub(super) fn try_unwrap(this: Self) -> Result<T, Self> {
        Rc::try_unwrap(this.0).map_err(Heap)
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
