use cartostyle::attr::parse_color;
use cartostyle::{
    DashHandle, EffectAttributes, GraphicsBackend, IconId, IconTable, RenderingContext, RuleClass,
    ShaderHandle, StyleBuilder,
};

/// Stand-in for a real renderer: every icon has a shader, only one dash
/// pattern is known.
struct Canvas;

impl GraphicsBackend for Canvas {
    fn shader(&self, icon: IconId) -> Option<ShaderHandle> {
        Some(ShaderHandle(icon.0))
    }

    fn dash_pattern(&self, pattern: &str) -> Option<DashHandle> {
        (pattern == "dash_4_4").then_some(DashHandle(1))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let icons: IconTable = ["fuel", "hatch_military"].into_iter().collect();
    let red = parse_color("#e03020").expect("valid color");

    // Define rules
    let style = StyleBuilder::new(&icons)
        .named("basic")
        .rule(RuleClass::Point, "amenity", |r| {
            r.value("fuel").min_zoom(14).icon("fuel")
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.value("primary").zoom(5, 12).main(
                EffectAttributes::new()
                    .color(red)
                    .stroke_width(2.0)
                    .shadow(0x8000_0000, 1.5),
            )
        })
        .rule(RuleClass::Line, "highway", |r| {
            r.min_zoom(10)
                .main(EffectAttributes::new().color(0xFFAA_AAAA).dash("dash_4_4"))
        })
        .rule(RuleClass::Polygon, "landuse", |r| {
            r.value("military").min_zoom(10).shader("hatch_military")
        })
        // Rejected: no minimum zoom.
        .rule(RuleClass::Line, "railway", |r| r.value("rail"))
        .build();

    println!("{style}");

    let resolver = style.resolver(&icons, &Canvas);

    println!("fuel icon at z15: {:?}", resolver.resolve_icon("amenity", "fuel", 15));

    for (value, zoom) in [("primary", 8), ("primary", 13), ("track", 11), ("track", 4)] {
        let mut ctx = RenderingContext::new();
        if resolver.resolve_polyline("highway", value, zoom, 0, &mut ctx) {
            println!("highway={value} z{zoom}: {:?}", ctx.primary);
        } else {
            println!("highway={value} z{zoom}: not drawn");
        }
    }

    let mut ctx = RenderingContext::new();
    if resolver.resolve_polygon("landuse", "military", 12, &mut ctx) {
        println!("landuse=military z12: {:?}", ctx.primary);
    }
}
