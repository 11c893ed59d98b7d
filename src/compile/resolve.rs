use crate::{
    animation::ease::Timing,
    film::model::{Animation, ColorSpan, Film, Property, Scene, Step, ValueSpan},
    foundation::core::{Axis, Percent, Size, Unit, Viewport},
    foundation::error::{ScrollfilmError, ScrollfilmResult},
    host::dom::Host,
};

/// Host measurements for one scene, captured once per geometry change.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredScene<N> {
    /// Scene container element.
    pub node: N,
    /// Natural scene duration: the container's client height in pixels.
    pub duration_px: f64,
    /// Animated element per animation, in animation order.
    pub animations: Vec<MeasuredAnimation<N>>,
}

/// Host measurements for one animation target.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredAnimation<N> {
    /// Target element.
    pub node: N,
    /// The target's client size, used to resolve percent-unit spans.
    pub size: Size,
}

/// Host measurements for a whole film.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredFilm<N> {
    /// Film root element.
    pub root: N,
    /// Natural (pre-override) height of the root element in pixels.
    pub root_height: f64,
    /// Per-scene measurements, in scene order.
    pub scenes: Vec<MeasuredScene<N>>,
}

/// A fully resolved film: every offset in absolute pixels, every property span
/// resolved against its target element. Rebuilt wholesale on resize.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFilm<N> {
    /// Total scroll distance the film occupies: the maximum of the root
    /// element's natural height and the sum of weighted scene extents.
    pub film_height: f64,
    /// Resolved scenes in scroll order.
    pub scenes: Vec<ResolvedScene<N>>,
}

/// One resolved scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedScene<N> {
    /// Scene key from the configuration.
    pub key: String,
    /// Scene container element.
    pub node: N,
    /// Absolute start offset in pixels: the sum of all prior scenes'
    /// `time_factor * duration`.
    pub start_px: f64,
    /// Measured scene duration in pixels.
    pub duration_px: f64,
    /// Scroll-distance multiplier.
    pub time_factor: f64,
    /// Resolved animations, in configuration order.
    pub animations: Vec<ResolvedAnimation<N>>,
}

/// One resolved animation bound to its target element.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAnimation<N> {
    /// Animation key from the configuration.
    pub key: String,
    /// Target element.
    pub node: N,
    /// Resolved steps, in scroll order.
    pub steps: Vec<ResolvedStep>,
}

/// A step with absolute pixel window and fully resolved property spans.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStep {
    /// Absolute window start in pixels, relative to the film start.
    pub start_px: f64,
    /// Window length in pixels.
    pub duration_px: f64,
    /// Resolved property spans; all lengths are absolute pixels.
    pub properties: ResolvedProperties,
    /// Timing-function override for this step.
    pub transition: Option<Timing>,
}

/// Per-property resolved spans of a step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedProperties {
    /// Horizontal translation in pixels.
    pub translate_x: Option<ResolvedSpan>,
    /// Vertical translation in pixels.
    pub translate_y: Option<ResolvedSpan>,
    /// Rotation in degrees.
    pub rotate: Option<ResolvedSpan>,
    /// Uniform scale factor.
    pub scale: Option<ResolvedSpan>,
    /// Opacity.
    pub opacity: Option<ResolvedSpan>,
    /// Foreground color.
    pub color: Option<ColorSpan>,
    /// SVG fill color.
    pub fill: Option<ColorSpan>,
    /// Width in pixels.
    pub width: Option<ResolvedSpan>,
    /// Top box offset in pixels.
    pub top: Option<ResolvedSpan>,
    /// Left box offset in pixels.
    pub left: Option<ResolvedSpan>,
    /// Bottom box offset in pixels.
    pub bottom: Option<ResolvedSpan>,
    /// Right box offset in pixels.
    pub right: Option<ResolvedSpan>,
}

/// Absolute from/to endpoints; no units remain after resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedSpan {
    /// Value at and before the step start.
    pub from: f64,
    /// Value at and after the step end.
    pub to: f64,
}

impl ResolvedSpan {
    /// The value delta over the step window.
    pub fn delta(self) -> f64 {
        self.to - self.from
    }
}

/// Convert a percent of scene extent into pixels: the viewport extent on
/// `axis`, scaled by the scene's time factor.
pub fn scene_pixels(value: Percent, time_factor: f64, axis: Axis, viewport: Viewport) -> f64 {
    value.fraction() * viewport.extent(axis) * time_factor
}

/// Measure every scene container and animation target once.
///
/// A selector that matches nothing is a configuration error reported here,
/// not on every frame tick.
#[tracing::instrument(skip(host, root, film))]
pub fn measure<H: Host>(
    host: &H,
    root: &H::Node,
    film: &Film,
) -> ScrollfilmResult<MeasuredFilm<H::Node>> {
    let mut scenes = Vec::with_capacity(film.scenes.len());
    for scene in &film.scenes {
        let node = host.query(&scene.wrapper, Some(root)).ok_or_else(|| {
            ScrollfilmError::compile(format!(
                "scene '{}': no element matches wrapper '{}'",
                scene.key, scene.wrapper
            ))
        })?;
        let duration_px = host.client_size(&node).height;

        let mut animations = Vec::with_capacity(scene.animations.len());
        for animation in &scene.animations {
            let target = host.query(&animation.selector, Some(&node)).ok_or_else(|| {
                ScrollfilmError::compile(format!(
                    "scene '{}', animation '{}': no element matches selector '{}'",
                    scene.key, animation.key, animation.selector
                ))
            })?;
            animations.push(MeasuredAnimation {
                size: host.client_size(&target),
                node: target,
            });
        }

        scenes.push(MeasuredScene {
            node,
            duration_px,
            animations,
        });
    }

    Ok(MeasuredFilm {
        root: root.clone(),
        root_height: host.natural_height(root),
        scenes,
    })
}

/// Resolve a film against measurements and the current viewport.
///
/// Pure and deterministic: identical inputs produce an identical
/// [`ResolvedFilm`]. Runs once per geometry change, never per frame.
#[tracing::instrument(skip(film, measured, viewport))]
pub fn resolve<N: Clone>(
    film: &Film,
    measured: &MeasuredFilm<N>,
    viewport: Viewport,
) -> ScrollfilmResult<ResolvedFilm<N>> {
    if measured.scenes.len() != film.scenes.len() {
        return Err(ScrollfilmError::compile(format!(
            "measurements cover {} scenes but the film has {}",
            measured.scenes.len(),
            film.scenes.len()
        )));
    }

    let mut scenes = Vec::with_capacity(film.scenes.len());
    let mut scene_start = 0.0_f64;
    for (index, scene) in film.scenes.iter().enumerate() {
        let m = &measured.scenes[index];

        let mut animations = Vec::with_capacity(scene.animations.len());
        for (animation, measured_anim) in scene.animations.iter().zip(&m.animations) {
            animations.push(resolve_animation(
                film,
                scene,
                index,
                scene_start,
                animation,
                measured_anim,
                viewport,
            )?);
        }

        scenes.push(ResolvedScene {
            key: scene.key.clone(),
            node: m.node.clone(),
            start_px: scene_start,
            duration_px: m.duration_px,
            time_factor: scene.time_factor,
            animations,
        });
        scene_start += scene.time_factor * m.duration_px;
    }

    let film_height = measured.root_height.max(scene_start);
    tracing::debug!(
        scenes = scenes.len(),
        film_height,
        "resolved film geometry"
    );

    Ok(ResolvedFilm {
        film_height,
        scenes,
    })
}

fn resolve_animation<N: Clone>(
    film: &Film,
    scene: &Scene,
    scene_index: usize,
    scene_start: f64,
    animation: &Animation,
    measured: &MeasuredAnimation<N>,
    viewport: Viewport,
) -> ScrollfilmResult<ResolvedAnimation<N>> {
    let steps = animation
        .steps
        .iter()
        .map(|step| {
            resolve_step(
                film,
                scene,
                scene_index,
                scene_start,
                animation,
                step,
                measured.size,
                viewport,
            )
        })
        .collect::<ScrollfilmResult<Vec<_>>>()?;

    Ok(ResolvedAnimation {
        key: animation.key.clone(),
        node: measured.node.clone(),
        steps,
    })
}

fn resolve_step(
    film: &Film,
    scene: &Scene,
    scene_index: usize,
    scene_start: f64,
    animation: &Animation,
    step: &Step,
    element: Size,
    viewport: Viewport,
) -> ScrollfilmResult<ResolvedStep> {
    // A negative start is measured against the previous scene's time factor,
    // letting the step begin before this scene's boundary.
    let start_factor = if step.start.is_negative() {
        let previous = scene_index.checked_sub(1).ok_or_else(|| {
            ScrollfilmError::compile(format!(
                "scene '{}', animation '{}': negative step start has no previous scene",
                scene.key, animation.key
            ))
        })?;
        film.scenes[previous].time_factor
    } else {
        scene.time_factor
    };

    let start_px = scene_start + scene_pixels(step.start, start_factor, Axis::Y, viewport);
    let duration_px = scene_pixels(step.duration, scene.time_factor, Axis::Y, viewport);
    if duration_px < 0.0 {
        return Err(ScrollfilmError::compile(format!(
            "scene '{}', animation '{}': step duration resolves to {duration_px}px",
            scene.key, animation.key
        )));
    }

    let p = &step.properties;
    let span = |value: Option<ValueSpan>, property: Property| {
        value.map(|v| resolve_span(v, property, element))
    };
    let properties = ResolvedProperties {
        translate_x: span(p.translate_x, Property::TranslateX),
        translate_y: span(p.translate_y, Property::TranslateY),
        rotate: span(p.rotate, Property::Rotate),
        scale: span(p.scale, Property::Scale),
        opacity: span(p.opacity, Property::Opacity),
        color: p.color,
        fill: p.fill,
        width: span(p.width, Property::Width),
        top: span(p.top, Property::Top),
        left: span(p.left, Property::Left),
        bottom: span(p.bottom, Property::Bottom),
        right: span(p.right, Property::Right),
    };

    Ok(ResolvedStep {
        start_px,
        duration_px,
        properties,
        transition: step.transition,
    })
}

/// Resolve one property span against the target element's own size.
fn resolve_span(span: ValueSpan, property: Property, element: Size) -> ResolvedSpan {
    if span.unit == Some(Unit::Percent)
        && let Some(axis) = property.axis()
    {
        let extent = match axis {
            Axis::X => element.width,
            Axis::Y => element.height,
        };
        return ResolvedSpan {
            from: span.from / 100.0 * extent,
            to: span.to / 100.0 * extent,
        };
    }
    ResolvedSpan {
        from: span.from,
        to: span.to,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/resolve.rs"]
mod tests;
