#![forbid(unsafe_code)]

//! Render memoization for components.
//!
//! # Design
//!
//! [`Memoized<C>`] wraps a component together with its previous render
//! (properties and view). Each `view` call compares the incoming properties
//! against the cached ones with `PartialEq`; on a match the cached view is
//! cloned back instead of re-invoking the inner component. The cache is a
//! single slot: only the immediately previous render can justify a skip, so
//! alternating between two property values re-renders every time.
//!
//! Equality is the crate-wide shallow policy: scalar and value-type fields
//! compare by `==`, fields wrapped in [`Shared`](zentui_core::Shared)
//! compare by reference. Callers must keep `Shared` fields referentially
//! stable across frames to benefit; a rebuilt handle with equal contents
//! counts as changed and re-renders.
//!
//! # Invariants
//!
//! 1. For any properties, the returned view is interchangeable with what the
//!    unwrapped component would have produced.
//! 2. Equal consecutive properties never re-invoke the inner component.
//! 3. Changed properties always re-invoke it; no skip is ever justified by
//!    anything but equality with the previous render.
//! 4. `renders()` increments by exactly 1 per completed inner render.
//!
//! # Failure Modes
//!
//! - **Inner `view` panics**: the cache and render counter are unchanged;
//!   the panic propagates and the next `view` call retries.
//! - **Referentially unstable props**: fresh `Shared` allocations every
//!   frame make every comparison a miss. The wrapper degenerates to the
//!   unwrapped component (every call renders); it never skips a changed
//!   view.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::component::Component;

/// Previous render held by the wrapper.
struct MemoSlot<C: Component> {
    /// Properties the cached view was rendered from.
    props: C::Props,
    /// The cached view itself.
    view: C::View,
}

/// A component wrapper that skips re-rendering when properties are
/// unchanged.
///
/// `Memoized<C>` is itself a [`Component`] with the same `Props` and `View`
/// types as `C`, so hosts drive it exactly like the component it wraps.
///
/// # Invariants
///
/// 1. The slot holds the previous render iff `is_primed()` is true.
/// 2. A cached view is returned only when the incoming properties compare
///    equal to the slot's.
/// 3. The first render after construction always invokes the inner
///    component.
pub struct Memoized<C: Component> {
    inner: C,
    slot: RefCell<Option<MemoSlot<C>>>,
    renders: Cell<u64>,
}

impl<C: Component> Memoized<C> {
    /// Wrap `inner` with an unprimed cache.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            slot: RefCell::new(None),
            renders: Cell::new(0),
        }
    }

    /// Number of completed inner renders.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders.get()
    }

    /// Whether a previous render is cached.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// The wrapped component.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap, discarding the cache.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Component for Memoized<C>
where
    C: Component,
    C::Props: Clone + PartialEq,
    C::View: Clone,
{
    type Props = C::Props;
    type View = C::View;

    fn view(&self, props: &C::Props) -> C::View {
        if let Some(slot) = self.slot.borrow().as_ref()
            && slot.props == *props
        {
            tracing::trace!(message = "memo.skip", component = self.inner.name());
            return slot.view.clone();
        }

        let view = self.inner.view(props);
        let renders = self.renders.get() + 1;
        self.renders.set(renders);
        *self.slot.borrow_mut() = Some(MemoSlot {
            props: props.clone(),
            view: view.clone(),
        });
        tracing::trace!(message = "memo.render", component = self.inner.name(), renders);
        view
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl<C: Component> fmt::Debug for Memoized<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("component", &self.inner.name())
            .field("primed", &self.is_primed())
            .field("renders", &self.renders.get())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
