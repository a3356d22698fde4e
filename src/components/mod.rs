//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component is independent: it owns a disjoint set of elements, is
//! constructed from resolved handles (or fails to mount), and exposes its
//! behavior as plain methods. The hydrate-only `wire` functions attach those
//! methods to browser events and observers.

pub mod clipboard;
pub mod counter;
pub mod filter;
pub mod footer;
pub mod nav;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;
