use crate::{
    compile::resolve::{measure, resolve},
    driver::frame::{FilmCtx, Scheduler, StopHandle, apply_frame},
    film::model::Film,
    foundation::error::ScrollfilmResult,
    host::dom::Host,
};

/// Wires validation, measurement, resolution and the frame driver together.
///
/// The engine owns the geometry context; [`Engine::on_resize`] rebuilds it
/// from scratch and the next tick reads the fresh state, so the driver never
/// needs a restart.
#[derive(Debug)]
pub struct Engine<H: Host> {
    film: Film,
    root: H::Node,
    ctx: FilmCtx<H::Node>,
    stop: StopHandle,
}

impl<H: Host> Engine<H> {
    /// One-shot entry point: validate the film, compile it against current
    /// host geometry, and size the root element to the film height.
    ///
    /// Fails fast on configuration errors: malformed scenes or steps, and
    /// selectors that match no element.
    #[tracing::instrument(skip(host, root, film))]
    pub fn init(host: &mut H, root: H::Node, film: Film) -> ScrollfilmResult<Self> {
        film.validate()?;
        let ctx = build_ctx(host, &root, &film)?;
        Ok(Self {
            film,
            root,
            ctx,
            stop: StopHandle::new(),
        })
    }

    /// Recompute all geometry after a viewport or layout change.
    ///
    /// The context is overwritten wholesale, never merged.
    #[tracing::instrument(skip(self, host))]
    pub fn on_resize(&mut self, host: &mut H) -> ScrollfilmResult<()> {
        self.ctx = build_ctx(host, &self.root, &self.film)?;
        tracing::debug!(
            film_height = self.ctx.film_height,
            film_offset = self.ctx.film_offset,
            "recomputed film geometry"
        );
        Ok(())
    }

    /// Apply a single frame at the host's current scroll position.
    pub fn tick(&self, host: &mut H) {
        apply_frame(host, &self.ctx);
    }

    /// Drive frames until the stop handle fires, waiting on the scheduler
    /// between ticks.
    pub fn run<S: Scheduler>(&self, host: &mut H, scheduler: &mut S) {
        while !self.stop.is_stopped() {
            self.tick(host);
            scheduler.next_frame();
        }
    }

    /// A handle that cancels [`Engine::run`] from anywhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// The current geometry context, for inspection.
    pub fn ctx(&self) -> &FilmCtx<H::Node> {
        &self.ctx
    }
}

fn build_ctx<H: Host>(
    host: &mut H,
    root: &H::Node,
    film: &Film,
) -> ScrollfilmResult<FilmCtx<H::Node>> {
    let measured = measure(host, root, film)?;
    let resolved = resolve(film, &measured, host.viewport())?;

    host.set_height(root, resolved.film_height);
    let film_offset = host.page_offset_top(root).round();

    Ok(FilmCtx {
        film_offset,
        film_height: resolved.film_height,
        resolved,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/setup/engine.rs"]
mod tests;
