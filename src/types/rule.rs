use super::effect::EffectAttributes;
use super::registry::IconId;
use super::text::TextRule;
use super::zoom::ZoomRange;

/// A style rule as produced by an ingestion source, before validation.
///
/// Drafts are registered through [`StyleBuilder`](super::StyleBuilder) or
/// [`RuleRepository::register`](super::RuleRepository::register), which turn
/// them into immutable [`Rule`]s or reject them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleDraft {
    pub tag: String,
    /// `None` registers the rule in the tag's wildcard bucket.
    pub value: Option<String>,
    /// Required. A draft without a minimum zoom is rejected.
    pub min_zoom: Option<u32>,
    /// `None` means unbounded above.
    pub max_zoom: Option<u32>,
    /// Drawing layer, only consulted for line rules.
    pub layer: i32,
    /// Required for point rules and must resolve in the icon registry.
    pub icon_name: Option<String>,
    pub shader_name: Option<String>,
    pub main: EffectAttributes,
    pub overlay_1: Option<EffectAttributes>,
    pub overlay_2: Option<EffectAttributes>,
    pub text: Option<TextRule>,
}

impl RuleDraft {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_owned());
        self
    }

    #[must_use]
    pub fn min_zoom(mut self, zoom: u32) -> Self {
        self.min_zoom = Some(zoom);
        self
    }

    #[must_use]
    pub fn max_zoom(mut self, zoom: u32) -> Self {
        self.max_zoom = Some(zoom);
        self
    }

    #[must_use]
    pub fn zoom(self, min: u32, max: u32) -> Self {
        self.min_zoom(min).max_zoom(max)
    }

    /// Set both bounds from raw ingestion values where `-1` means unset.
    /// See [`ZoomRange::from_raw`].
    #[must_use]
    pub fn raw_zoom(mut self, min: i32, max: i32) -> Self {
        let range = ZoomRange::from_raw(min, max);
        self.min_zoom = range.map(|r| r.min);
        self.max_zoom = range.and_then(|r| r.max);
        self
    }

    #[must_use]
    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn icon(mut self, name: &str) -> Self {
        self.icon_name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn shader(mut self, name: &str) -> Self {
        self.shader_name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn main(mut self, effect: EffectAttributes) -> Self {
        self.main = effect;
        self
    }

    #[must_use]
    pub fn overlay_1(mut self, effect: EffectAttributes) -> Self {
        self.overlay_1 = Some(effect);
        self
    }

    #[must_use]
    pub fn overlay_2(mut self, effect: EffectAttributes) -> Self {
        self.overlay_2 = Some(effect);
        self
    }

    #[must_use]
    pub fn text(mut self, text: TextRule) -> Self {
        self.text = Some(text);
        self
    }
}

/// A validated, immutable style rule stored in a
/// [`RuleRepository`](super::RuleRepository).
///
/// `priority` is the registration order across the whole repository; among
/// rules matching equally well, the lower priority wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub(crate) tag: String,
    pub(crate) value: Option<String>,
    pub(crate) zoom: ZoomRange,
    pub(crate) layer: i32,
    pub(crate) icon_name: Option<String>,
    pub(crate) icon: Option<IconId>,
    pub(crate) shader_name: Option<String>,
    pub(crate) main: EffectAttributes,
    pub(crate) overlay_1: Option<EffectAttributes>,
    pub(crate) overlay_2: Option<EffectAttributes>,
    pub(crate) text: Option<TextRule>,
    pub(crate) priority: u32,
}

impl Rule {
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomRange {
        self.zoom
    }

    #[must_use]
    pub fn layer(&self) -> i32 {
        self.layer
    }

    #[must_use]
    pub fn icon_name(&self) -> Option<&str> {
        self.icon_name.as_deref()
    }

    /// Icon id resolved when the rule was registered.
    #[must_use]
    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    #[must_use]
    pub fn shader_name(&self) -> Option<&str> {
        self.shader_name.as_deref()
    }

    #[must_use]
    pub fn main(&self) -> &EffectAttributes {
        &self.main
    }

    #[must_use]
    pub fn overlay_1(&self) -> Option<&EffectAttributes> {
        self.overlay_1.as_ref()
    }

    #[must_use]
    pub fn overlay_2(&self) -> Option<&EffectAttributes> {
        self.overlay_2.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&TextRule> {
        self.text.as_ref()
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    #[must_use]
    pub(crate) fn applies_at(&self, zoom: u32) -> bool {
        self.zoom.contains(zoom)
    }

    /// Text styling usable for a label at `zoom`: the rule must cover the
    /// zoom, accept the requested ref mode and carry a font size.
    #[must_use]
    pub(crate) fn label_style(&self, zoom: u32, ref_requested: bool) -> Option<&TextRule> {
        let text = self.text.as_ref()?;
        (self.applies_at(zoom) && text.ref_mode.accepts(ref_requested) && text.has_size())
            .then_some(text)
    }
}
