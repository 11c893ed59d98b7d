use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::{compile::resolve::ResolvedFilm, eval::sample::element_style, host::dom::Host};

/// Geometry state shared between setup and the frame driver.
///
/// Owned by [`crate::Engine`] and replaced wholesale on resize; read-only
/// within each frame tick.
#[derive(Clone, Debug)]
pub struct FilmCtx<N> {
    /// Page offset of the film root in pixels.
    pub film_offset: f64,
    /// Total scroll distance the film occupies in pixels.
    pub film_height: f64,
    /// The resolved film.
    pub resolved: ResolvedFilm<N>,
}

impl<N> FilmCtx<N> {
    /// Scroll offset relative to the film start for a global scroll position.
    pub fn relative_offset(&self, scroll_top: f64) -> f64 {
        scroll_top - self.film_offset
    }
}

/// Apply one frame: sample every animated element at the current scroll
/// offset and write the styles through the host.
///
/// When the scroll position is outside the film's range nothing is written
/// this tick; elements keep their last-applied styles.
pub fn apply_frame<H: Host>(host: &mut H, ctx: &FilmCtx<H::Node>) {
    let offset = ctx.relative_offset(host.scroll_top());
    if offset < 0.0 || offset > ctx.film_height {
        return;
    }

    for scene in &ctx.resolved.scenes {
        for animation in &scene.animations {
            let style = element_style(animation, offset);
            host.apply_style(&animation.node, &style);
        }
    }
}

/// Platform frame-scheduling seam: blocks until the next frame should run.
pub trait Scheduler {
    /// Wait for the platform's next-frame signal.
    fn next_frame(&mut self);
}

/// Fixed-interval fallback scheduler for hosts without a native
/// animation-frame primitive.
#[derive(Clone, Copy, Debug)]
pub struct FixedInterval {
    period: Duration,
}

impl FixedInterval {
    /// Schedule at a fixed period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// The ~16.6ms period of a 60Hz display.
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_600))
    }
}

impl Scheduler for FixedInterval {
    fn next_frame(&mut self) {
        std::thread::sleep(self.period);
    }
}

/// Cancellation handle for the frame loop.
///
/// Clones share state; stopping any clone stops the loop after its current
/// tick, releasing the host instead of running until teardown.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Build a fresh, not-yet-stopped handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop after its current tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame.rs"]
mod tests;
