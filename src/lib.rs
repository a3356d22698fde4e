//! Progressive enhancement for the static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page as a single
//! module. The HTML already contains every section and control; the crate
//! only attaches behavior to it. Any component whose elements are missing is
//! skipped, and the page stays fully readable when the module fails to load.
//!
//! All component logic runs against the [`dom::ElementHandle`] and
//! [`dom::Page`] traits so it can be tested natively. Browser bindings live
//! behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Bootstrap: wires every component once the document is parsed |
//! | [`components`] | Theme, nav, reveal, counters, filter, copy, scroll spy, footer |
//! | [`net`] | GitHub profile fetch and summary rendering |
//! | [`dom`] | Element and page abstractions with browser and fake backends |
//! | [`observe`] | Intersection observer port and listener subscriptions |
//! | [`store`] | Persistent key/value preferences |
//! | [`config`] | Inline site configuration |
//! | [`error`] | Mount, fetch, clipboard and config errors |

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;
pub mod observe;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"folio: logger already initialized".into());
    }
    app::start_when_ready();
}
