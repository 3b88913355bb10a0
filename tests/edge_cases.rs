mod support;

use cartostyle::{
    CapStyle, DashHandle, EffectAttributes, GraphicsBackend, IconId, OPAQUE_BLACK,
    PaintProperties, RefMode, RenderingContext, RuleClass, RuleDraft, ShaderHandle, StyleBuilder,
    TextRule,
};
use support::{TestBackend, icons};

#[test]
fn first_registered_rule_wins_in_a_bucket() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("forest")
                .min_zoom(0)
                .main(EffectAttributes::new().color(0xFF00_8800))
        })
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("forest")
                .min_zoom(0)
                .main(EffectAttributes::new().color(0xFF00_4400))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polygon("landuse", "forest", 10, &mut ctx));
    assert_eq!(ctx.primary.color, 0xFF00_8800);
}

#[test]
fn exact_bucket_beats_wildcard_even_when_registered_later() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "highway", |r| {
            r.min_zoom(0).main(EffectAttributes::new().color(0xFF11_1111))
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.value("motorway")
                .min_zoom(0)
                .main(EffectAttributes::new().color(0xFF22_2222))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polyline("highway", "motorway", 10, 0, &mut ctx));
    assert_eq!(ctx.primary.color, 0xFF22_2222);
}

#[test]
fn exact_bucket_out_of_zoom_falls_back_to_wildcard() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "highway", |r| {
            r.value("track")
                .zoom(14, 18)
                .main(EffectAttributes::new().color(0xFF99_6633))
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.min_zoom(10).main(EffectAttributes::new().color(0xFF55_5555))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polyline("highway", "track", 12, 0, &mut ctx));
    assert_eq!(ctx.primary.color, 0xFF55_5555);
}

#[test]
fn wildcard_layer_rule_used_when_exact_bucket_has_other_layers_only() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "highway", |r| {
            r.value("primary")
                .min_zoom(0)
                .layer(1)
                .main(EffectAttributes::new().color(0xFF00_0001))
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.min_zoom(0).main(EffectAttributes::new().color(0xFF00_0002))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polyline("highway", "primary", 10, 1, &mut ctx));
    assert_eq!(ctx.primary.color, 0xFF00_0001);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polyline("highway", "primary", 10, -1, &mut ctx));
    assert_eq!(ctx.primary.color, 0xFF00_0002);
}

#[test]
fn polyline_without_color_is_opaque_black() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "barrier", |r| {
            r.min_zoom(0)
                .main(EffectAttributes::new().stroke_width(1.0).cap(CapStyle::Square))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    ctx.primary.color = 0xFFFF_FFFF;
    assert!(resolver.resolve_polyline("barrier", "fence", 17, 0, &mut ctx));
    assert_eq!(ctx.primary.color, OPAQUE_BLACK);
    assert_eq!(ctx.primary.cap, CapStyle::Square);
}

#[test]
fn polygon_shader_forces_black_before_overlay() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("military").min_zoom(0).shader("hatch_military")
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polygon("landuse", "military", 12, &mut ctx));
    assert_eq!(ctx.primary.color, OPAQUE_BLACK);
    assert_eq!(ctx.primary.shader_id, Some(ShaderHandle(1003)));
}

/// Backend without any shader resources.
struct NoShaders;

impl GraphicsBackend for NoShaders {
    fn shader(&self, _icon: IconId) -> Option<ShaderHandle> {
        None
    }

    fn dash_pattern(&self, _pattern: &str) -> Option<DashHandle> {
        None
    }
}

#[test]
fn polygon_registered_shader_forces_black_without_backend_shader() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("military").min_zoom(0).shader("hatch_military")
        })
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("quarry").min_zoom(0).shader("hatch_quarry")
        })
        .build();
    let resolver = style.resolver(&icons, &NoShaders);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polygon("landuse", "military", 12, &mut ctx));
    assert_eq!(ctx.primary.color, OPAQUE_BLACK);
    assert_eq!(ctx.primary.shader_id, None);
    assert!(ctx.primary.fill_area);

    // Shader name unknown to the icon registry: no forced color.
    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polygon("landuse", "quarry", 12, &mut ctx));
    assert_eq!(ctx.primary.color, 0);
    assert_eq!(ctx.primary.shader_id, None);
}

#[test]
fn unknown_dash_pattern_degrades_gracefully() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "boundary", |r| {
            r.min_zoom(0)
                .main(EffectAttributes::new().dash("dash_9_9").color(0xFF88_0088))
                .overlay_1(EffectAttributes::new().dash("dash_5_5"))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_polyline("boundary", "administrative", 6, 0, &mut ctx));
    assert_eq!(ctx.primary.dash_id, None);
    assert_eq!(ctx.primary.color, 0xFF88_0088);
    assert_eq!(ctx.secondary.dash_id, Some(DashHandle(55)));
    assert_eq!(ctx.tertiary, PaintProperties::default());
}

#[test]
fn shadow_requires_both_fields_in_one_effect() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "highway", |r| {
            r.value("a").min_zoom(0).main(EffectAttributes::new().shadow(0xFF00_0000, 0.0))
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.value("b").min_zoom(0).main(EffectAttributes::new().shadow(0xFF00_0000, 2.5))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    resolver.resolve_polyline("highway", "a", 10, 0, &mut ctx);
    assert_eq!(ctx.primary.shadow_color, 0);
    assert_eq!(ctx.primary.shadow_radius, 0.0);

    resolver.resolve_polyline("highway", "b", 10, 0, &mut ctx);
    assert_eq!(ctx.primary.shadow_color, 0xFF00_0000);
    assert_eq!(ctx.primary.shadow_radius, 2.5);
}

#[test]
fn icon_query_exact_then_wildcard() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Point, "amenity", |r| {
            r.value("fuel").min_zoom(14).icon("fuel")
        })
        .rule(RuleClass::Point, "amenity", |r| r.min_zoom(16).icon("parking"))
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    assert_eq!(resolver.resolve_icon("amenity", "fuel", 14), Some(IconId(0)));
    assert_eq!(resolver.resolve_icon("amenity", "fuel", 13), None);
    assert_eq!(resolver.resolve_icon("amenity", "bench", 16), Some(IconId(1)));
    assert_eq!(resolver.resolve_icon("amenity", "bench", 15), None);
}

#[test]
fn text_exact_length_wins_regardless_of_registration_order() {
    let icons = icons();
    let generic_last = StyleBuilder::new(&icons)
        .rule(RuleClass::Text, "place", |r| {
            r.value("town").min_zoom(0).text(TextRule::new(18.0).exact_length(3))
        })
        .rule(RuleClass::Text, "place", |r| {
            r.value("town").min_zoom(0).text(TextRule::new(10.0))
        })
        .build();
    let resolver = generic_last.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    resolver.resolve_text("Ulm", "place", "town", 9, false, &mut ctx);
    assert_eq!(ctx.text_size, 18.0);
}

#[test]
fn text_ref_and_name_are_separate() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Text, "highway", |r| {
            r.min_zoom(10).text(
                TextRule::new(9.0)
                    .ref_mode(RefMode::Ref)
                    .shield("motorway_shield"),
            )
        })
        .rule(RuleClass::Text, "highway", |r| {
            r.min_zoom(10).text(TextRule::new(12.0).ref_mode(RefMode::Name).on_path(true))
        })
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_text("A1", "highway", "motorway", 11, true, &mut ctx).is_some());
    assert_eq!(ctx.text_size, 9.0);
    assert_eq!(ctx.text_shield_icon_id, Some(IconId(4)));

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_text("Ringstraße", "highway", "primary", 11, false, &mut ctx).is_some());
    assert_eq!(ctx.text_size, 12.0);
    assert!(ctx.show_text_on_path);
    assert_eq!(ctx.text_shield_icon_id, None);
}

#[test]
fn text_rule_without_size_is_skipped_for_wildcard() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Text, "place", |r| {
            r.value("village").min_zoom(0).text(TextRule::new(0.0).bold(true))
        })
        .rule(RuleClass::Text, "place", |r| r.min_zoom(0).text(TextRule::new(8.0)))
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_text("Hallstatt", "place", "village", 12, false, &mut ctx).is_some());
    assert_eq!(ctx.text_size, 8.0);
    assert!(!ctx.text_bold);
}

#[test]
fn text_rule_without_text_attributes_never_labels() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Text, "place", |r| r.min_zoom(0))
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert_eq!(resolver.resolve_text("Wels", "place", "town", 5, false, &mut ctx), None);
    assert_eq!(resolver.resolve_text("B1", "place", "town", 5, true, &mut ctx), None);
}

#[test]
fn partitions_do_not_leak_into_each_other() {
    let icons = icons();
    let style = StyleBuilder::new(&icons)
        .rule(RuleClass::Line, "natural", |r| r.min_zoom(0))
        .rule(RuleClass::Reserved, "natural", |r| r.min_zoom(0))
        .build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(!resolver.resolve_polygon("natural", "water", 5, &mut ctx));
    assert!(resolver.resolve_icon("natural", "water", 5).is_none());
    assert!(resolver.resolve_polyline("natural", "water", 5, 0, &mut ctx));
    assert_eq!(style.rules().class_len(RuleClass::Reserved), 1);
}

#[test]
fn unknown_tag_returns_negative_results() {
    let icons = icons();
    let style = StyleBuilder::new(&icons).build();
    let resolver = style.resolver(&icons, &TestBackend);

    let mut ctx = RenderingContext::new();
    assert!(resolver.resolve_icon("x", "y", 1).is_none());
    assert!(!resolver.resolve_polyline("x", "y", 1, 0, &mut ctx));
    assert!(!resolver.resolve_polygon("x", "y", 1, &mut ctx));
    assert!(resolver.resolve_text("z", "x", "y", 1, false, &mut ctx).is_none());
    assert_eq!(ctx, RenderingContext::default());
}

#[test]
fn try_add_rule_reports_reason() {
    let icons = icons();
    let mut builder = StyleBuilder::new(&icons);
    let err = builder
        .try_add_rule(RuleClass::Point, RuleDraft::new("shop").min_zoom(15).icon("bakery"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "point rule for tag 'shop' references unknown icon 'bakery'"
    );
}
