use std::fmt;
use std::str::FromStr;

use super::context::PaintProperties;
use super::registry::GraphicsBackend;
use crate::attr::AttrError;

/// Stroke end-cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapStyle {
    #[default]
    Butt,
    Round,
    Square,
}

impl fmt::Display for CapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapStyle::Butt => write!(f, "butt"),
            CapStyle::Round => write!(f, "round"),
            CapStyle::Square => write!(f, "square"),
        }
    }
}

impl FromStr for CapStyle {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::attr::parse_cap(s)
    }
}

/// Sparse set of paint overrides forming one visual layer of a rule.
///
/// Unset fields (`None`, a zero color, a non-positive width) leave the target
/// paint slot alone when applied.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectAttributes {
    pub cap: Option<CapStyle>,
    pub color: u32,
    pub dash_pattern: Option<String>,
    pub stroke_width: f32,
    pub shadow_color: u32,
    pub shadow_radius: f32,
}

impl EffectAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cap(mut self, cap: CapStyle) -> Self {
        self.cap = Some(cap);
        self
    }

    #[must_use]
    pub fn color(mut self, argb: u32) -> Self {
        self.color = argb;
        self
    }

    #[must_use]
    pub fn dash(mut self, pattern: &str) -> Self {
        self.dash_pattern = Some(pattern.to_owned());
        self
    }

    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn shadow(mut self, argb: u32, radius: f32) -> Self {
        self.shadow_color = argb;
        self.shadow_radius = radius;
        self
    }

    /// True when applying this effect would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cap.is_none()
            && self.color == 0
            && self.dash_pattern.is_none()
            && self.stroke_width <= 0.0
            && !self.has_shadow()
    }

    fn has_shadow(&self) -> bool {
        self.shadow_color != 0 && self.shadow_radius > 0.0
    }

    /// Overlay the set fields of this effect onto `slot`.
    ///
    /// Shadow color and radius only take effect together. A dash pattern the
    /// backend cannot resolve is skipped.
    pub fn apply_to(&self, slot: &mut PaintProperties, graphics: &impl GraphicsBackend) {
        if let Some(cap) = self.cap {
            slot.cap = cap;
        }
        if self.color != 0 {
            slot.color = self.color;
        }
        if let Some(dash) = self
            .dash_pattern
            .as_deref()
            .and_then(|p| graphics.dash_pattern(p))
        {
            slot.dash_id = Some(dash);
        }
        if self.stroke_width > 0.0 {
            slot.stroke_width = self.stroke_width;
        }
        if self.has_shadow() {
            slot.shadow_color = self.shadow_color;
            slot.shadow_radius = self.shadow_radius;
        }
    }
}
