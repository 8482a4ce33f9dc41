//! Optional message-producing handlers for widgets.
//!
//! Widgets store their handlers as `Callback<T, M>` instead of spelling out
//! `Option<Box<dyn Fn(T) -> M>>`:
//!
//! ```ignore
//! use colorwheel_ui::Callback;
//!
//! struct Wheel<M> {
//!     on_select: Callback<WedgeIndex, M>,
//! }
//!
//! impl<M> Wheel<M> {
//!     fn on_select(mut self, f: impl Fn(WedgeIndex) -> M + 'static) -> Self {
//!         self.on_select = Callback::new(f);
//!         self
//!     }
//! }
//! ```

use std::fmt;

/// A handler turning a `T` into a message `M`, or nothing if unset.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// A callback with no handler
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the handler, returning its message if one is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_callback_yields_nothing() {
        let cb: Callback<u32, String> = Callback::none();
        assert!(!cb.is_some());
        assert_eq!(cb.call(3), None);
    }

    #[test]
    fn test_set_callback_maps_value() {
        let cb = Callback::new(|n: u32| n * 2);
        assert_eq!(cb.call(21), Some(42));
    }
}
