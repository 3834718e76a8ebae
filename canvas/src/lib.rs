//! Mind-map core: heading text in, positioned and interactive node graph out.
//!
//! This crate has no window, font or file dependency. The host feeds it text
//! and pointer events and gets back [`engine::Action`]s plus a
//! [`render::Scene`] snapshot to paint. Everything here is single-threaded and
//! synchronous; the host owns the event loop and the clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`outline`] | Heading extraction from raw text |
//! | [`layout`] | Level-slot layout and text measurement |
//! | [`graph`] | Node/connection store, collapse, search, selection |
//! | [`connector`] | Cubic connector geometry |
//! | [`engine`] | Interaction controller, [`engine::EngineCore`] |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against visible nodes |
//! | [`debounce`] | Trailing-edge re-render timer |
//! | [`render`] | Scene snapshot and the [`render::RenderAdapter`] contract |
//! | [`camera`] | Points, rectangles, pan/zoom |
//! | [`consts`] | Shared layout and interaction constants |

pub mod camera;
pub mod connector;
pub mod consts;
pub mod debounce;
pub mod engine;
pub mod graph;
pub mod hit;
pub mod input;
pub mod layout;
pub mod outline;
pub mod render;
