//! Input module - click-to-move selection
//!
//! The GUI turns two clicks into one long-algebraic move: the first click
//! picks up a piece of the side to move, the second names its target.
//! [`Selection`] holds that state between clicks and is plain data, so the
//! whole interaction can be driven without a window.

pub mod selection;

pub use selection::Selection;
