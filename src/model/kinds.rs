use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

const DISPLAY_DECIMALS: usize = 4;

/// A CSS percentage such as `50%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn half(self) -> Self {
        Self(self.0 / 2.0)
    }

    /// Accepts `"50%"` as well as a bare `"50"`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let number = text.strip_suffix('%').unwrap_or(text).trim();
        number
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self)
    }
}

impl std::ops::Sub for Percentage {
    type Output = Percentage;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Four decimal places at most, trailing zeros trimmed: `33.3 - 10.1 / 2`
/// prints as `28.25%`.
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.*}", DISPLAY_DECIMALS, self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" => f.write_str("0%"),
            value => write!(f, "{value}%"),
        }
    }
}

/// Compositing mode of a layer. The editor offers four; any other keyword is
/// carried through as written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BlendMode {
    #[default]
    HardLight,
    Screen,
    Multiply,
    Overlay,
    Other(String),
}

impl BlendMode {
    pub fn as_css(&self) -> &str {
        match self {
            Self::HardLight => "hard-light",
            Self::Screen => "screen",
            Self::Multiply => "multiply",
            Self::Overlay => "overlay",
            Self::Other(keyword) => keyword,
        }
    }
}

impl From<String> for BlendMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hard-light" => Self::HardLight,
            "screen" => Self::Screen,
            "multiply" => Self::Multiply,
            "overlay" => Self::Overlay,
            _ => Self::Other(value),
        }
    }
}

impl From<BlendMode> for String {
    fn from(value: BlendMode) -> Self {
        value.as_css().to_string()
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Which predefined motion keyframe a layer runs, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    #[default]
    None,
    MoveInCircle,
    MoveVertical,
    MoveHorizontal,
}

impl AnimationType {
    pub const ALL: [AnimationType; 4] = [
        AnimationType::None,
        AnimationType::MoveInCircle,
        AnimationType::MoveVertical,
        AnimationType::MoveHorizontal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MoveInCircle => "moveInCircle",
            Self::MoveVertical => "moveVertical",
            Self::MoveHorizontal => "moveHorizontal",
        }
    }

    /// Name of the `@keyframes` block this animation binds to.
    pub const fn keyframes_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            other => Some(other.as_str()),
        }
    }
}

impl FromStr for AnimationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("animation type", s))
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl TimingFunction {
    pub const ALL: [TimingFunction; 5] = [
        TimingFunction::Ease,
        TimingFunction::Linear,
        TimingFunction::EaseIn,
        TimingFunction::EaseOut,
        TimingFunction::EaseInOut,
    ];

    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl FromStr for TimingFunction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|timing| timing.as_css() == s)
            .ok_or_else(|| UnknownVariant::new("timing function", s))
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_parses_with_and_without_suffix() {
        assert_eq!(Percentage::parse("50%"), Some(Percentage::new(50.0)));
        assert_eq!(Percentage::parse(" 12.5 "), Some(Percentage::new(12.5)));
        assert_eq!(Percentage::parse("abc%"), None);
        assert_eq!(Percentage::parse("NaN"), None);
    }

    #[test]
    fn percentage_displays_as_css() {
        assert_eq!(Percentage::new(80.0).to_string(), "80%");
        assert_eq!(Percentage::new(20.5).to_string(), "20.5%");
        assert_eq!(Percentage::new(-15.0).to_string(), "-15%");
    }

    #[test]
    fn percentage_display_drops_float_noise() {
        let top = Percentage::new(33.3) - Percentage::new(10.1).half();
        assert_eq!(top.to_string(), "28.25%");
        assert_eq!(Percentage::new(0.1 + 0.2).to_string(), "0.3%");
        assert_eq!(Percentage::new(12.34567).to_string(), "12.3457%");
        assert_eq!(Percentage::new(-0.00001).to_string(), "0%");
        assert_eq!(Percentage::new(0.0).to_string(), "0%");
    }

    #[test]
    fn blend_mode_keeps_unknown_keywords() {
        assert_eq!(BlendMode::from("screen".to_string()), BlendMode::Screen);
        let custom = BlendMode::from("color-dodge".to_string());
        assert_eq!(custom, BlendMode::Other("color-dodge".to_string()));
        assert_eq!(custom.as_css(), "color-dodge");
    }

    #[test]
    fn animation_type_parses_editor_names() {
        assert_eq!(
            "moveInCircle".parse::<AnimationType>(),
            Ok(AnimationType::MoveInCircle)
        );
        assert_eq!(AnimationType::None.keyframes_name(), None);
        assert_eq!(
            AnimationType::MoveHorizontal.keyframes_name(),
            Some("moveHorizontal")
        );
        let err = "spin".parse::<AnimationType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown animation type: spin");
    }

    #[test]
    fn timing_function_defaults_to_ease() {
        assert_eq!(TimingFunction::default(), TimingFunction::Ease);
        assert_eq!(
            "ease-in-out".parse::<TimingFunction>(),
            Ok(TimingFunction::EaseInOut)
        );
        assert!("cubic".parse::<TimingFunction>().is_err());
    }
}
