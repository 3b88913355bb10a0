use super::effect::CapStyle;
use super::registry::{DashHandle, IconId, ShaderHandle};

/// Fully opaque black in packed ARGB.
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// One paint slot of a [`RenderingContext`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaintProperties {
    pub color: u32,
    pub cap: CapStyle,
    pub shader_id: Option<ShaderHandle>,
    pub dash_id: Option<DashHandle>,
    pub stroke_width: f32,
    pub fill_area: bool,
    pub shadow_color: u32,
    pub shadow_radius: f32,
}

/// Caller-owned output buffer filled in by style queries.
///
/// A context belongs to the thread resolving one feature. Queries only write
/// the fields a matching rule sets; everything else keeps its prior value, so
/// callers that reuse a context between features should call
/// [`reset`](Self::reset) first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderingContext {
    pub primary: PaintProperties,
    pub secondary: PaintProperties,
    pub tertiary: PaintProperties,

    pub text_size: f32,
    pub text_color: u32,
    pub text_min_distance: f32,
    pub show_text_on_path: bool,
    pub text_shield_icon_id: Option<IconId>,
    pub text_wrap_width: u32,
    pub text_halo_radius: f32,
    pub text_bold: bool,
    pub text_vertical_offset: f32,
}

impl RenderingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Paint slots in drawing order.
    #[must_use]
    pub fn layers(&self) -> [&PaintProperties; 3] {
        [&self.primary, &self.secondary, &self.tertiary]
    }
}
