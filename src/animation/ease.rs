/// Per-step timing function selecting how a span progresses over its window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Timing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Quadratic deceleration to rest.
    EaseOut,
    /// Quadratic acceleration until halfway, then deceleration.
    #[default]
    EaseInOut,
}

impl Timing {
    /// Evaluate the timing function in the parametrized easing form:
    /// `t` elapsed, `b` start value, `c` value delta, `d` total duration.
    pub fn apply(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            Self::Linear => c * t / d + b,
            Self::EaseIn => {
                let t = t / d;
                c * t * t + b
            }
            Self::EaseOut => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            Self::EaseInOut => {
                let mut t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t + b;
                }
                t -= 1.0;
                -c / 2.0 * (t * (t - 2.0) - 1.0) + b
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
