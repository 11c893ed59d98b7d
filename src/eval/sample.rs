use crate::{
    compile::resolve::{ResolvedAnimation, ResolvedSpan, ResolvedStep},
    film::model::ColorSpan,
    foundation::core::Color,
    host::dom::ElementStyle,
};

/// Sample one span at a film-relative scroll offset.
///
/// Offsets at or before the step start return exactly `from`; offsets at or
/// past the step end return exactly `to`; in between, the step's timing
/// function (default ease-in-out) interpolates.
pub fn sample_span(step: &ResolvedStep, span: ResolvedSpan, offset: f64) -> f64 {
    if offset <= step.start_px {
        return span.from;
    }
    if offset >= step.start_px + step.duration_px {
        return span.to;
    }
    step.transition.unwrap_or_default().apply(
        offset - step.start_px,
        span.from,
        span.delta(),
        step.duration_px,
    )
}

/// Sample a color span by interpolating its four channels independently.
///
/// Channels are clamped back into range (`0..=255`, opacity `[0, 1]`) when the
/// color is reassembled.
pub fn sample_color(step: &ResolvedStep, span: ColorSpan, offset: f64) -> Color {
    let from = span.from.channels();
    let to = span.to.channels();
    let mut out = [0.0; 4];
    for (slot, (f, t)) in out.iter_mut().zip(from.into_iter().zip(to)) {
        *slot = sample_span(step, ResolvedSpan { from: f, to: t }, offset);
    }
    Color::from_channels(out)
}

/// Select the step that governs the given scroll offset.
///
/// The first step containing the offset wins; failing that, the first step
/// whose window is still ahead of the offset; failing that, the last step,
/// pinning scroll-past-end to final values. `None` only for empty sequences.
pub fn active_step(steps: &[ResolvedStep], offset: f64) -> Option<&ResolvedStep> {
    steps
        .iter()
        .find(|step| {
            let contains =
                step.start_px <= offset && offset <= step.start_px + step.duration_px;
            contains || step.start_px >= offset
        })
        .or_else(|| steps.last())
}

/// Compute the full interpolated style of one animated element.
///
/// Absent property spans degrade to the documented defaults: identity
/// transform and opacity 1 are always present; color, fill, width and box
/// offsets stay unapplied.
pub fn element_style<N>(animation: &ResolvedAnimation<N>, offset: f64) -> ElementStyle {
    let Some(step) = active_step(&animation.steps, offset) else {
        return ElementStyle::default();
    };

    let p = &step.properties;
    let scalar = |span: Option<ResolvedSpan>, default: f64| {
        span.map_or(default, |s| sample_span(step, s, offset))
    };
    let optional = |span: Option<ResolvedSpan>| span.map(|s| sample_span(step, s, offset));
    let color = |span: Option<ColorSpan>| span.map(|s| sample_color(step, s, offset));

    ElementStyle {
        translate_x: scalar(p.translate_x, 0.0),
        translate_y: scalar(p.translate_y, 0.0),
        rotate_deg: scalar(p.rotate, 0.0),
        scale: scalar(p.scale, 1.0),
        // Easing overshoot must not produce a negative opacity.
        opacity: scalar(p.opacity, 1.0).abs(),
        color: color(p.color),
        fill: color(p.fill),
        width: optional(p.width),
        top: optional(p.top),
        left: optional(p.left),
        bottom: optional(p.bottom),
        right: optional(p.right),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sample.rs"]
mod tests;
