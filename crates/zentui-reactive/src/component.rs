#![forbid(unsafe_code)]

//! The component seam: a view function behind a trait.
//!
//! A [`Component`] turns borrowed properties into an owned view value. The
//! host decides when to render; components decide only what a render
//! produces. Wrappers such as [`Memoized`](crate::Memoized) accept any
//! `Component` and implement the trait themselves, so wrapping never
//! changes how a host drives rendering.
//!
//! Plain closures become components through [`component`] / [`ViewFn`], so
//! function-style and struct-style components pass through wrappers the
//! same way.

use std::fmt;
use std::marker::PhantomData;

/// A view function from borrowed properties to an owned view value.
///
/// `view` must be pure with respect to the wrapper contract: for the same
/// properties it returns interchangeable views. Side effects inside `view`
/// stay legal but run only when a render actually happens, which a wrapper
/// may elide.
pub trait Component {
    /// Input properties for one render.
    type Props;
    /// Rendered output.
    type View;

    /// Produce the view for `props`.
    fn view(&self, props: &Self::Props) -> Self::View;

    /// Component name for diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Adapter making a plain `Fn(&P) -> V` closure a [`Component`].
///
/// Built with [`component`]:
///
/// ```
/// use zentui_reactive::{Component, component};
///
/// let label = component(|count: &u32| format!("clicked {count} times"));
/// assert_eq!(label.view(&3), "clicked 3 times");
/// ```
pub struct ViewFn<P, V, F> {
    f: F,
    _marker: PhantomData<fn(&P) -> V>,
}

/// Wrap a closure as a [`Component`].
#[must_use]
pub fn component<P, V, F>(f: F) -> ViewFn<P, V, F>
where
    F: Fn(&P) -> V,
{
    ViewFn {
        f,
        _marker: PhantomData,
    }
}

impl<P, V, F> Component for ViewFn<P, V, F>
where
    F: Fn(&P) -> V,
{
    type Props = P;
    type View = V;

    fn view(&self, props: &P) -> V {
        (self.f)(props)
    }
}

impl<P, V, F> fmt::Debug for ViewFn<P, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFn").finish_non_exhaustive()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting;

    impl Component for Greeting {
        type Props = String;
        type View = String;

        fn view(&self, props: &String) -> String {
            format!("hello, {props}")
        }
    }

    #[test]
    fn struct_component_renders() {
        let c = Greeting;
        assert_eq!(c.view(&"world".to_string()), "hello, world");
    }

    #[test]
    fn closure_component_renders() {
        let double = component(|n: &i32| n * 2);
        assert_eq!(double.view(&21), 42);
    }

    #[test]
    fn default_name_is_type_name() {
        let c = Greeting;
        assert!(c.name().contains("Greeting"));
    }

    #[test]
    fn closure_components_can_capture() {
        let suffix = String::from("!");
        let shout = component(move |s: &String| format!("{s}{suffix}"));
        assert_eq!(shout.view(&"hey".to_string()), "hey!");
    }

    #[test]
    fn view_fn_debug_format() {
        let c = component(|n: &u8| *n);
        assert!(format!("{c:?}").contains("ViewFn"));
    }
}
