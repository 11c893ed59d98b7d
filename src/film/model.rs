use crate::{
    animation::ease::Timing,
    foundation::core::{Axis, Color, Percent, Unit},
    foundation::error::{ScrollfilmError, ScrollfilmResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A complete scroll film: the ordered list of scenes the page scrolls through.
///
/// A film is a pure data model that can be:
/// - built programmatically
/// - serialized/deserialized via Serde (JSON)
///
/// Driving a film against a host is performed by [`crate::Engine`].
pub struct Film {
    /// Scenes in scroll order. Order determines cumulative start offsets.
    pub scenes: Vec<Scene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One ordered block of scroll distance containing animations.
pub struct Scene {
    /// Scene identifier (stable within a film).
    pub key: String,
    /// Selector for the scene's container element, scoped to the film root.
    pub wrapper: String,
    /// Scroll-distance multiplier applied to this scene's extent.
    #[serde(default = "default_time_factor")]
    pub time_factor: f64,
    /// Animations bound to elements inside this scene's container.
    #[serde(default)]
    pub animations: Vec<Animation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Binds an ordered sequence of steps to one target element.
pub struct Animation {
    /// Animation identifier (stable within its scene).
    pub key: String,
    /// Selector for the target element, scoped to the scene container.
    pub selector: String,
    /// Steps in scroll order.
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A time window within an animation, expressed in percent of scene extent.
pub struct Step {
    /// Start offset relative to the scene start. A negative percent means the
    /// step is measured against the previous scene's time factor (it begins
    /// before this scene's boundary); invalid in the first scene.
    pub start: Percent,
    /// Window length as a non-negative percent of scene extent.
    pub duration: Percent,
    /// Animated property spans. Absent properties use documented defaults.
    #[serde(default)]
    pub properties: StepProperties,
    /// Timing-function override for this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Timing>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-property spans of a step. One explicit optional per property: a span
/// is either present with from/to endpoints, or absent.
pub struct StepProperties {
    /// Horizontal translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<ValueSpan>,
    /// Vertical translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<ValueSpan>,
    /// Rotation in degrees (unitless span).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<ValueSpan>,
    /// Uniform scale factor (unitless span).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ValueSpan>,
    /// Opacity in `[0, 1]` (unitless span).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<ValueSpan>,
    /// Foreground color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpan>,
    /// SVG fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorSpan>,
    /// Element width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ValueSpan>,
    /// Top box offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ValueSpan>,
    /// Left box offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<ValueSpan>,
    /// Bottom box offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ValueSpan>,
    /// Right box offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<ValueSpan>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Numeric from/to endpoints with an optional unit.
pub struct ValueSpan {
    /// Value at and before the step start.
    pub from: f64,
    /// Value at and after the step end.
    pub to: f64,
    /// Endpoint unit; `%` resolves against the target element's own size on
    /// the property's axis. Defaults to pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl ValueSpan {
    /// A pixel-unit span from `from` to `to`.
    pub fn px(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            unit: Some(Unit::Px),
        }
    }

    /// A percent-unit span from `from` to `to`.
    pub fn percent(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            unit: Some(Unit::Percent),
        }
    }

    /// A unitless span from `from` to `to`.
    pub fn value(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            unit: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Color from/to endpoints, interpolated channel by channel.
pub struct ColorSpan {
    /// Color at and before the step start.
    pub from: Color,
    /// Color at and after the step end.
    pub to: Color,
}

/// Animated property names, with the axis each percent-unit span resolves
/// against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Horizontal translation.
    TranslateX,
    /// Vertical translation.
    TranslateY,
    /// Rotation in degrees.
    Rotate,
    /// Uniform scale.
    Scale,
    /// Opacity.
    Opacity,
    /// Foreground color.
    Color,
    /// SVG fill color.
    Fill,
    /// Element width.
    Width,
    /// Top box offset.
    Top,
    /// Left box offset.
    Left,
    /// Bottom box offset.
    Bottom,
    /// Right box offset.
    Right,
}

impl Property {
    /// The axis a `%` unit resolves against, or `None` for unitless
    /// properties (rotate, scale, opacity) and colors.
    ///
    /// This is an explicit table: horizontal properties resolve against the
    /// element's width, vertical ones against its height.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::TranslateX | Self::Left | Self::Right | Self::Width => Some(Axis::X),
            Self::TranslateY | Self::Top | Self::Bottom => Some(Axis::Y),
            Self::Rotate | Self::Scale | Self::Opacity | Self::Color | Self::Fill => None,
        }
    }
}

fn default_time_factor() -> f64 {
    1.0
}

impl Film {
    /// Build a film from scenes in scroll order.
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// Deserialize a film from a JSON document.
    pub fn from_json_str(json: &str) -> ScrollfilmResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScrollfilmError::validation(format!("invalid film JSON: {e}")))
    }

    /// Validate film invariants: key uniqueness, selector presence, finite
    /// geometry inputs, and previous-scene markers that have a previous scene.
    pub fn validate(&self) -> ScrollfilmResult<()> {
        if self.scenes.is_empty() {
            return Err(ScrollfilmError::validation(
                "film must contain at least one scene",
            ));
        }

        let mut seen_scene_keys = Vec::with_capacity(self.scenes.len());
        for (scene_index, scene) in self.scenes.iter().enumerate() {
            if scene.key.trim().is_empty() {
                return Err(ScrollfilmError::validation("scene key must be non-empty"));
            }
            if seen_scene_keys.contains(&scene.key.as_str()) {
                return Err(ScrollfilmError::validation(format!(
                    "duplicate scene key '{}'",
                    scene.key
                )));
            }
            seen_scene_keys.push(scene.key.as_str());

            if scene.wrapper.trim().is_empty() {
                return Err(ScrollfilmError::validation(format!(
                    "scene '{}' wrapper selector must be non-empty",
                    scene.key
                )));
            }
            if !scene.time_factor.is_finite() || scene.time_factor <= 0.0 {
                return Err(ScrollfilmError::validation(format!(
                    "scene '{}' time_factor must be finite and > 0",
                    scene.key
                )));
            }

            let mut seen_anim_keys = Vec::with_capacity(scene.animations.len());
            for animation in &scene.animations {
                if animation.key.trim().is_empty() {
                    return Err(ScrollfilmError::validation(format!(
                        "scene '{}': animation key must be non-empty",
                        scene.key
                    )));
                }
                if seen_anim_keys.contains(&animation.key.as_str()) {
                    return Err(ScrollfilmError::validation(format!(
                        "scene '{}': duplicate animation key '{}'",
                        scene.key, animation.key
                    )));
                }
                seen_anim_keys.push(animation.key.as_str());

                if animation.selector.trim().is_empty() {
                    return Err(ScrollfilmError::validation(format!(
                        "animation '{}' selector must be non-empty",
                        animation.key
                    )));
                }
                if animation.steps.is_empty() {
                    return Err(ScrollfilmError::validation(format!(
                        "animation '{}' must contain at least one step",
                        animation.key
                    )));
                }

                for step in &animation.steps {
                    validate_step(scene, scene_index, animation, step)?;
                }
            }
        }

        Ok(())
    }
}

fn validate_step(
    scene: &Scene,
    scene_index: usize,
    animation: &Animation,
    step: &Step,
) -> ScrollfilmResult<()> {
    let at = format!("scene '{}', animation '{}'", scene.key, animation.key);

    if !step.start.0.is_finite() {
        return Err(ScrollfilmError::validation(format!(
            "{at}: step start must be finite"
        )));
    }
    if step.start.is_negative() && scene_index == 0 {
        return Err(ScrollfilmError::validation(format!(
            "{at}: negative step start refers to a previous scene, but this is the first scene"
        )));
    }
    if !step.duration.0.is_finite() || step.duration.is_negative() {
        return Err(ScrollfilmError::validation(format!(
            "{at}: step duration must be finite and >= 0"
        )));
    }

    let spans = [
        (Property::TranslateX, step.properties.translate_x),
        (Property::TranslateY, step.properties.translate_y),
        (Property::Rotate, step.properties.rotate),
        (Property::Scale, step.properties.scale),
        (Property::Opacity, step.properties.opacity),
        (Property::Width, step.properties.width),
        (Property::Top, step.properties.top),
        (Property::Left, step.properties.left),
        (Property::Bottom, step.properties.bottom),
        (Property::Right, step.properties.right),
    ];
    for (property, span) in spans {
        let Some(span) = span else { continue };
        if !span.from.is_finite() || !span.to.is_finite() {
            return Err(ScrollfilmError::validation(format!(
                "{at}: {property:?} endpoints must be finite"
            )));
        }
        if span.unit == Some(Unit::Percent) && property.axis().is_none() {
            return Err(ScrollfilmError::validation(format!(
                "{at}: unit '%' is not supported for {property:?}"
            )));
        }
    }
    for span in [step.properties.color, step.properties.fill]
        .into_iter()
        .flatten()
    {
        if !span.from.a.is_finite() || !span.to.a.is_finite() {
            return Err(ScrollfilmError::validation(format!(
                "{at}: color opacity endpoints must be finite"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/film/model.rs"]
mod tests;
