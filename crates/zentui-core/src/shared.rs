#![forbid(unsafe_code)]

//! Reference-equality handles for render-stable properties.
//!
//! Property comparison throughout the reactive crates is shallow: scalars
//! compare by value, composite values compare by identity. [`Shared<T>`]
//! is the identity half of that policy. Two handles are equal exactly when
//! they point at the same allocation; a deep clone of the same content is a
//! different value.
//!
//! # Invariants
//!
//! 1. `a == b` iff `a` and `b` share one allocation (`Rc::ptr_eq`).
//! 2. Cloning a handle preserves equality; rebuilding the content does not.
//! 3. Equality never reads `T`, so comparing handles is O(1) regardless of
//!    the payload size.
//!
//! # Example
//!
//! ```
//! use zentui_core::Shared;
//!
//! let items = Shared::new(vec![1, 2, 3]);
//! let alias = items.clone();
//! let rebuilt = Shared::new(vec![1, 2, 3]);
//!
//! assert_eq!(items, alias);
//! assert_ne!(items, rebuilt);
//! assert_eq!(items.len(), 3);
//! ```

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared immutable value compared by identity, not content.
pub struct Shared<T: ?Sized> {
    inner: Rc<T>,
}

impl<T> Shared<T> {
    /// Wrap `value` in a fresh allocation.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }
}

impl<T: ?Sized> Shared<T> {
    /// Whether two handles point at the same allocation.
    ///
    /// This is the same relation `==` uses; it exists for call sites that
    /// want the intent spelled out.
    #[inline]
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> AsRef<T> for Shared<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&*self.inner).finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_are_equal() {
        let a = Shared::new(String::from("hello"));
        let b = a.clone();
        assert_eq!(a, b);
        assert!(Shared::ptr_eq(&a, &b));
    }

    #[test]
    fn equal_content_distinct_allocations_are_not_equal() {
        let a = Shared::new(vec![1, 2, 3]);
        let b = Shared::new(vec![1, 2, 3]);
        assert_ne!(a, b);
        assert!(!Shared::ptr_eq(&a, &b));
    }

    #[test]
    fn deref_reads_the_payload() {
        let items = Shared::new(vec![10, 20]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], 20);
    }

    #[test]
    fn as_ref_matches_deref() {
        let s = Shared::new(String::from("x"));
        assert_eq!(s.as_ref(), &*s);
    }

    #[test]
    fn from_wraps_like_new() {
        let a: Shared<u32> = 7.into();
        assert_eq!(*a, 7);
    }

    #[test]
    fn equality_ignores_payload_equality() {
        // Payload types without PartialEq or Debug still get handle equality.
        struct Opaque;
        let a = Shared::new(Opaque);
        let b = a.clone();
        let c = Shared::new(Opaque);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn debug_shows_payload() {
        let a = Shared::new(42u8);
        assert_eq!(format!("{a:?}"), "Shared(42)");
    }
}
