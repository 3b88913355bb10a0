/// Whether a text rule labels plain names, route references, or was left
/// unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefMode {
    /// No preference; applies to plain names.
    #[default]
    Unset,
    Name,
    Ref,
}

impl RefMode {
    /// Whether a rule in this mode may label a request for a ref (`true`) or
    /// a plain name (`false`).
    #[must_use]
    pub fn accepts(self, ref_requested: bool) -> bool {
        match self {
            RefMode::Ref => ref_requested,
            RefMode::Unset | RefMode::Name => !ref_requested,
        }
    }
}

/// Label styling carried by a text rule.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextRule {
    pub ref_mode: RefMode,
    /// Label length in characters this rule is dedicated to; `0` for any.
    pub exact_length: usize,
    /// Font size. Non-positive means unset, which makes the rule unusable.
    pub size: f32,
    pub color: u32,
    pub min_label_distance: f32,
    pub show_on_path: bool,
    pub shield_icon_name: Option<String>,
    pub wrap_width: u32,
    pub halo_radius: f32,
    pub bold: bool,
    pub vertical_offset: f32,
}

impl TextRule {
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ref_mode(mut self, mode: RefMode) -> Self {
        self.ref_mode = mode;
        self
    }

    #[must_use]
    pub fn exact_length(mut self, len: usize) -> Self {
        self.exact_length = len;
        self
    }

    #[must_use]
    pub fn color(mut self, argb: u32) -> Self {
        self.color = argb;
        self
    }

    #[must_use]
    pub fn min_label_distance(mut self, distance: f32) -> Self {
        self.min_label_distance = distance;
        self
    }

    #[must_use]
    pub fn on_path(mut self, on_path: bool) -> Self {
        self.show_on_path = on_path;
        self
    }

    #[must_use]
    pub fn shield(mut self, icon_name: &str) -> Self {
        self.shield_icon_name = Some(icon_name.to_owned());
        self
    }

    #[must_use]
    pub fn wrap_width(mut self, width: u32) -> Self {
        self.wrap_width = width;
        self
    }

    #[must_use]
    pub fn halo_radius(mut self, radius: f32) -> Self {
        self.halo_radius = radius;
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn vertical_offset(mut self, dy: f32) -> Self {
        self.vertical_offset = dy;
        self
    }

    #[must_use]
    pub(crate) fn has_size(&self) -> bool {
        self.size > 0.0
    }
}
