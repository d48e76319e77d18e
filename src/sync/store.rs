//! View store seam
//!
//! Where the [`ViewState`] table lives. Natively it is a shared `RefCell`;
//! the browser crate wraps a reactive signal so every write re-renders.

use std::cell::RefCell;
use std::rc::Rc;

use crate::view::ViewState;

/// Shared access to the view-state table.
///
/// Each call runs to completion before any other code touches the state,
/// which is what keeps concurrent request completions from interleaving.
pub trait ViewStore: Clone + 'static {
    /// Read from the table
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    /// Mutate the table
    fn write(&self, f: impl FnOnce(&mut ViewState));

    /// Mutate the table and hand back a value computed inside the update
    fn modify<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        let mut out = None;
        self.write(|state| out = Some(f(state)));
        out
    }
}

/// Single-threaded shared view state
pub type SharedView = Rc<RefCell<ViewState>>;

/// Create an empty shared view
pub fn shared_view() -> SharedView {
    Rc::new(RefCell::new(ViewState::new()))
}

impl ViewStore for SharedView {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut())
    }
}
