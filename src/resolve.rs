use tracing::trace;

use crate::types::OPAQUE_BLACK;
use crate::{
    GraphicsBackend, IconId, IconRegistry, RenderingContext, Rule, RuleClass, Style, TextRule,
};

/// Answers style queries for one [`Style`].
///
/// Every query looks in the exact tag/value bucket first and falls back to the
/// tag's wildcard bucket when the exact bucket yields no rule. A resolver only
/// borrows its collaborators and can be created per thread at no cost.
#[derive(Debug)]
pub struct StyleResolver<'a, I, G> {
    style: &'a Style,
    icons: &'a I,
    graphics: &'a G,
}

impl<I, G> Clone for StyleResolver<'_, I, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, G> Copy for StyleResolver<'_, I, G> {}

impl<'a, I: IconRegistry, G: GraphicsBackend> StyleResolver<'a, I, G> {
    #[must_use]
    pub fn new(style: &'a Style, icons: &'a I, graphics: &'a G) -> Self {
        Self {
            style,
            icons,
            graphics,
        }
    }

    #[must_use]
    pub fn style(&self) -> &'a Style {
        self.style
    }

    /// Icon of the first point rule covering `zoom`.
    #[must_use]
    pub fn resolve_icon(&self, tag: &str, value: &str, zoom: u32) -> Option<IconId> {
        self.find(RuleClass::Point, tag, value, |bucket| {
            bucket.iter().find(|r| r.applies_at(zoom))
        })
        .and_then(Rule::icon)
    }

    /// Style a line feature drawn on `layer`.
    ///
    /// Rules for the exact layer win over default-layer (`0`) rules in the
    /// same bucket. Returns `false` and leaves `ctx` untouched when no rule
    /// applies.
    pub fn resolve_polyline(
        &self,
        tag: &str,
        value: &str,
        zoom: u32,
        layer: i32,
        ctx: &mut RenderingContext,
    ) -> bool {
        let found = self.find(RuleClass::Line, tag, value, |bucket| {
            bucket
                .iter()
                .find(|r| r.applies_at(zoom) && r.layer == layer)
                .or_else(|| bucket.iter().find(|r| r.applies_at(zoom) && r.layer == 0))
        });
        let Some(rule) = found else {
            return false;
        };

        // A shader-only rule must not end up fully transparent.
        ctx.primary.color = OPAQUE_BLACK;
        if let Some(shader) = self.shader_for(rule) {
            ctx.primary.shader_id = Some(shader);
        }
        ctx.primary.fill_area = false;
        self.apply_effects(rule, ctx);
        true
    }

    /// Style an area feature. Returns `false` and leaves `ctx` untouched when
    /// no rule applies.
    pub fn resolve_polygon(
        &self,
        tag: &str,
        value: &str,
        zoom: u32,
        ctx: &mut RenderingContext,
    ) -> bool {
        let found = self.find(RuleClass::Polygon, tag, value, |bucket| {
            bucket.iter().find(|r| r.applies_at(zoom))
        });
        let Some(rule) = found else {
            return false;
        };

        // A registered shader icon forces black even if the backend has no
        // shader for it.
        if let Some(icon) = self.shader_icon(rule) {
            ctx.primary.color = OPAQUE_BLACK;
            if let Some(shader) = self.graphics.shader(icon) {
                ctx.primary.shader_id = Some(shader);
            }
        }
        ctx.primary.fill_area = true;
        self.apply_effects(rule, ctx);
        true
    }

    /// Style the label `label` of a feature.
    ///
    /// Rules dedicated to the label's exact length (in characters) win over
    /// generic rules in the same bucket. `ref_requested` selects rules meant
    /// for route references instead of plain names. Returns the label
    /// unchanged on a match; `None` leaves `ctx` untouched.
    pub fn resolve_text<'l>(
        &self,
        label: &'l str,
        tag: &str,
        value: &str,
        zoom: u32,
        ref_requested: bool,
        ctx: &mut RenderingContext,
    ) -> Option<&'l str> {
        if label.is_empty() {
            return None;
        }
        let len = label.chars().count();
        let text = self.find_map(RuleClass::Text, tag, value, |bucket| {
            let eligible = || {
                bucket
                    .iter()
                    .filter_map(|r| r.label_style(zoom, ref_requested))
            };
            eligible()
                .find(|t| t.exact_length == len)
                .or_else(|| eligible().find(|t| t.exact_length == 0))
        })?;

        self.fill_text(text, ctx);
        Some(label)
    }

    fn find<'s>(
        &'s self,
        class: RuleClass,
        tag: &str,
        value: &str,
        pick: impl Fn(&'s [Rule]) -> Option<&'s Rule>,
    ) -> Option<&'s Rule> {
        self.find_map(class, tag, value, pick)
    }

    /// Run `pick` on the exact bucket, then on the wildcard bucket if the
    /// exact one produced nothing.
    fn find_map<'s, T>(
        &'s self,
        class: RuleClass,
        tag: &str,
        value: &str,
        pick: impl Fn(&'s [Rule]) -> Option<T>,
    ) -> Option<T> {
        let rules = self.style.rules();
        if let Some(hit) = rules.bucket(class, tag, Some(value)).and_then(&pick) {
            return Some(hit);
        }
        let wildcard = rules.bucket(class, tag, None)?;
        trace!(%class, tag, value, "falling back to wildcard rules");
        pick(wildcard)
    }

    fn shader_icon(&self, rule: &Rule) -> Option<IconId> {
        self.icons.lookup(rule.shader_name.as_deref()?)
    }

    fn shader_for(&self, rule: &Rule) -> Option<crate::ShaderHandle> {
        self.graphics.shader(self.shader_icon(rule)?)
    }

    fn apply_effects(&self, rule: &Rule, ctx: &mut RenderingContext) {
        rule.main.apply_to(&mut ctx.primary, self.graphics);
        if let Some(effect) = &rule.overlay_1 {
            effect.apply_to(&mut ctx.secondary, self.graphics);
        }
        if let Some(effect) = &rule.overlay_2 {
            effect.apply_to(&mut ctx.tertiary, self.graphics);
        }
    }

    fn fill_text(&self, text: &TextRule, ctx: &mut RenderingContext) {
        ctx.text_size = text.size;
        ctx.text_color = if text.color == 0 {
            OPAQUE_BLACK
        } else {
            text.color
        };
        ctx.text_min_distance = text.min_label_distance;
        ctx.show_text_on_path = text.show_on_path;
        ctx.text_shield_icon_id = text
            .shield_icon_name
            .as_deref()
            .and_then(|name| self.icons.lookup(name));
        ctx.text_wrap_width = text.wrap_width;
        ctx.text_halo_radius = text.halo_radius;
        ctx.text_bold = text.bold;
        ctx.text_vertical_offset = text.vertical_offset;
    }
}
