//! Scrollfilm is a scroll-position-driven animation engine.
//!
//! It maps a page's vertical scroll offset to interpolated visual properties
//! (translation, rotation, scale, opacity, color) on host elements, organized
//! into ordered scenes and steps that together form a "film" of scroll
//! distance.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`Film::validate`] rejects malformed configuration up front
//! 2. **Measure**: `Film + Host -> MeasuredFilm` (element handles and sizes,
//!    captured once per geometry change)
//! 3. **Resolve**: `Film + MeasuredFilm + Viewport -> ResolvedFilm` (absolute
//!    pixel offsets, percent spans resolved against their target elements)
//! 4. **Drive**: each frame tick samples every animated element at the current
//!    scroll offset and writes an [`ElementStyle`] through the host
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: measurement and resolution are pure and stable for a
//!   given input; resolving twice yields identical structures.
//! - **Fail fast**: configuration errors (bad percents, selectors that match
//!   nothing, a previous-scene marker in the first scene) surface at setup,
//!   not per frame; absent properties degrade silently to documented defaults.
//! - **Host-agnostic**: DOM access and frame scheduling sit behind the
//!   [`Host`] and [`Scheduler`] traits; [`MemoryHost`] and [`FixedInterval`]
//!   ship as headless implementations.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod driver;
mod eval;
mod film;
mod foundation;
mod host;
mod setup;

pub use animation::ease::Timing;
pub use compile::resolve::{
    MeasuredAnimation, MeasuredFilm, MeasuredScene, ResolvedAnimation, ResolvedFilm,
    ResolvedProperties, ResolvedScene, ResolvedSpan, ResolvedStep, measure, resolve, scene_pixels,
};
pub use driver::frame::{FilmCtx, FixedInterval, Scheduler, StopHandle, apply_frame};
pub use eval::sample::{active_step, element_style, sample_color, sample_span};
pub use film::model::{
    Animation, ColorSpan, Film, Property, Scene, Step, StepProperties, ValueSpan,
};
pub use foundation::core::{Axis, Color, Percent, Size, Unit, Viewport};
pub use foundation::error::{ScrollfilmError, ScrollfilmResult};
pub use host::dom::{ElementStyle, Host};
pub use host::memory::{MemoryHost, NodeId};
pub use setup::engine::Engine;
