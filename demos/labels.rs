use cartostyle::attr::{parse_color, parse_depends};
use cartostyle::{
    DashHandle, GraphicsBackend, IconId, IconTable, RefMode, RenderingContext, RuleClass,
    RuleDraft, RuleVisitor, ShaderHandle, StyleBuilder, TextRule,
};

struct Canvas;

impl GraphicsBackend for Canvas {
    fn shader(&self, _icon: IconId) -> Option<ShaderHandle> {
        None
    }

    fn dash_pattern(&self, _pattern: &str) -> Option<DashHandle> {
        None
    }
}

/// Feeds hand-written parser events into any visitor.
fn load(visitor: &mut impl RuleVisitor) {
    visitor.on_style_metadata("labels", &parse_depends("default, base"));

    let white = parse_color("#ffffff").expect("valid color");
    visitor.on_rule_parsed(
        RuleClass::Text,
        RuleDraft::new("highway").value("motorway").min_zoom(8).text(
            TextRule::new(11.0)
                .ref_mode(RefMode::Ref)
                .shield("motorway_shield")
                .bold(true),
        ),
    );
    visitor.on_rule_parsed(
        RuleClass::Text,
        RuleDraft::new("highway").value("motorway").min_zoom(8).text(
            TextRule::new(9.0)
                .exact_length(2)
                .ref_mode(RefMode::Ref)
                .shield("motorway_shield"),
        ),
    );
    visitor.on_rule_parsed(
        RuleClass::Text,
        RuleDraft::new("highway").min_zoom(13).text(
            TextRule::new(10.0)
                .on_path(true)
                .color(parse_color("#404040").expect("valid color"))
                .halo_radius(1.5),
        ),
    );
    visitor.on_rule_parsed(
        RuleClass::Text,
        RuleDraft::new("place").value("city").min_zoom(4).text(
            TextRule::new(16.0)
                .wrap_width(12)
                .color(white)
                .min_label_distance(40.0),
        ),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let icons: IconTable = ["motorway_shield"].into_iter().collect();
    let mut builder = StyleBuilder::new(&icons);
    load(&mut builder);
    let style = builder.build();
    println!("{style} depends on {:?}", style.metadata().depends);

    let resolver = style.resolver(&icons, &Canvas);
    let queries = [
        ("A1", "highway", "motorway", 10, true),
        ("A100", "highway", "motorway", 10, true),
        ("Autobahn", "highway", "motorway", 14, false),
        ("Main Street", "highway", "residential", 12, false),
        ("Zürich", "place", "city", 6, false),
    ];
    for (label, tag, value, zoom, is_ref) in queries {
        let mut ctx = RenderingContext::new();
        match resolver.resolve_text(label, tag, value, zoom, is_ref, &mut ctx) {
            Some(text) => println!(
                "{text:?} ({tag}={value} z{zoom}): size={} shield={:?} on_path={}",
                ctx.text_size, ctx.text_shield_icon_id, ctx.show_text_on_path
            ),
            None => println!("{label:?} ({tag}={value} z{zoom}): no label"),
        }
    }
}
