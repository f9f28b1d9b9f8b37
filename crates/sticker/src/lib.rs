//! Sticker
//!
//! Sticky element behaviors driven by window scroll and resize.
//!
//! Each bound element is wrapped in a `<div class="sticker-wrapper">` that
//! reserves its space, and is then pinned according to its behavior:
//!
//! - `top`: fixed to the top of the viewport once scrolled past `topSpace`
//! - `bottom`: fixed to the bottom until its natural position comes into view
//! - `fill`: a footer fixed to the bottom while the page fits the viewport
//! - `sidebar`: pushed down inside its container with `padding-top`
//!
//! # Example
//! ```rust
//! use sticker::{Options, Sticker};
//! use sticker_dom::{Document, LayoutBox};
//!
//! let mut doc = Document::new(1024.0, 768.0);
//! let body = doc.body();
//! doc.set_layout(body, LayoutBox::new(0.0, 3000.0)).unwrap();
//! let header = doc.append_element(body, "header").unwrap();
//! doc.set_layout(header, LayoutBox::new(100.0, 60.0)).unwrap();
//!
//! let mut sticker = Sticker::new(doc);
//! let id = sticker.bind_one(header, &Options::new().top_space(20.0)).unwrap();
//!
//! sticker.scroll_to(200.0);
//! assert!(sticker.instance(id).unwrap().is_sticky());
//! ```

pub mod behavior;
mod dom_host;
mod error;
pub mod hooks;
pub mod host;
mod instance;
pub mod options;
mod scheduler;
mod sticker;

pub use behavior::{Behavior, Frame};
pub use error::{Result, StickerError};
pub use hooks::{AdjustHeight, Callback, FillCallback, FillTick, Hook, HookEvent, Hooks};
pub use host::{Css, CssValue, Dom, Host, Signal, TimerId, Window};
pub use instance::{ClassNames, Core, Instance, InstanceId, Target};
pub use options::{BehaviorKind, Options, Setting, Settings, StickerConfig, DEFAULT_NAMESPACE};
pub use scheduler::Scheduler;
pub use sticker::{Method, Sticker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
