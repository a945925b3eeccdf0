//! Card slider widgets for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It finds
//! slider containers on the page, and for each one steps a track of cards left
//! or right by one card's width, follows touch drags, answers arrow keys while
//! hovered, and keeps the previous/next controls enabled, disabled, or hidden
//! to match where the track sits.
//!
//! All interaction logic lives in [`engine::SliderCore`], which never touches
//! the DOM and is tested natively. [`widget::Slider`] is the thin browser host
//! around it.
//!
//! ## Page contract
//!
//! The module's start function only sets up logging. The page mounts sliders
//! itself by calling `mountSliders()` after `DOMContentLoaded` and holding on
//! to the returned `Sliders` handle; see [`registry::mount_sliders`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::SliderCore`] and the [`engine::Action`]s it emits |
//! | [`geometry`] | Track extents, clamping, and discrete positions |
//! | [`input`] | Keys, step directions, drag and motion state |
//! | [`config`] | Per-container configuration from `data-slider-config` |
//! | [`selectors`] | Recognized container, track, item, and control markers |
//! | [`widget`] | DOM host binding one container to a core |
//! | [`registry`] | Page-level mount/teardown and wasm entry points |
//! | [`listener`] | Event listeners removed on drop |
//! | [`timer`] | Cancellable debounce/settle timers |
//! | [`error`] | Mount-time error types |
//! | [`consts`] | Default timings, tolerances, and multipliers |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod listener;
pub mod registry;
pub mod selectors;
pub mod timer;
pub mod widget;

pub use config::{EdgePolicy, Navigation, SliderConfig};
pub use engine::{Action, Control, ControlState, SliderCore};
pub use error::{ConfigError, SliderError};
pub use geometry::Metrics;
pub use registry::{Sliders, mount_sliders};
pub use widget::Slider;
