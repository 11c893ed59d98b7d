use crate::foundation::core::{Color, Size, Viewport};

/// Host environment the engine measures and mutates.
///
/// A browser binding implements this over real DOM nodes; the crate ships
/// [`crate::MemoryHost`] for headless use and tests. Queries happen once per
/// geometry change (initial setup and resize), never per frame; per-frame work
/// is limited to [`Host::scroll_top`] reads and [`Host::apply_style`] writes.
pub trait Host {
    /// Opaque handle to a host element.
    type Node: Clone;

    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Find the first element matching `selector`, scoped to the subtree under
    /// `scope` (or the whole tree when `None`). `None` when nothing matches.
    fn query(&self, selector: &str, scope: Option<&Self::Node>) -> Option<Self::Node>;

    /// The element's current client size in pixels.
    fn client_size(&self, node: &Self::Node) -> Size;

    /// The element's natural layout height, ignoring any height override
    /// previously written through [`Host::set_height`].
    fn natural_height(&self, node: &Self::Node) -> f64;

    /// Distance in pixels from the top of the page to the element.
    fn page_offset_top(&self, node: &Self::Node) -> f64;

    /// Current global vertical scroll position in pixels.
    fn scroll_top(&self) -> f64;

    /// Override the element's height style, in pixels.
    fn set_height(&mut self, node: &Self::Node, px: f64);

    /// Write the interpolated style of one animated element.
    fn apply_style(&mut self, node: &Self::Node, style: &ElementStyle);
}

/// Interpolated style of one animated element for one frame.
///
/// Transform components and opacity are always present (falling back to the
/// identity defaults when a step omits them); the remaining properties are
/// only applied when the active step animates them. All lengths are absolute
/// pixels: percent spans are resolved away at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle {
    /// Horizontal translation in pixels. Default 0.
    pub translate_x: f64,
    /// Vertical translation in pixels. Default 0.
    pub translate_y: f64,
    /// Rotation in degrees. Default 0.
    pub rotate_deg: f64,
    /// Uniform scale factor. Default 1.
    pub scale: f64,
    /// Opacity in `[0, 1]`. Default 1.
    pub opacity: f64,
    /// Foreground color, when animated by the active step.
    pub color: Option<Color>,
    /// SVG fill color, when animated by the active step.
    pub fill: Option<Color>,
    /// Width in pixels, when animated by the active step.
    pub width: Option<f64>,
    /// Top box offset in pixels, when animated by the active step.
    pub top: Option<f64>,
    /// Left box offset in pixels, when animated by the active step.
    pub left: Option<f64>,
    /// Bottom box offset in pixels, when animated by the active step.
    pub bottom: Option<f64>,
    /// Right box offset in pixels, when animated by the active step.
    pub right: Option<f64>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            color: None,
            fill: None,
            width: None,
            top: None,
            left: None,
            bottom: None,
            right: None,
        }
    }
}

impl ElementStyle {
    /// The CSS transform string for this style, e.g.
    /// `translate3d(0px, -12px, 0) rotate(45deg) scale(1.5)`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            self.translate_x, self.translate_y, self.rotate_deg, self.scale
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/dom.rs"]
mod tests;
