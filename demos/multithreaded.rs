use std::sync::Arc;
use std::thread;

use cartostyle::{
    DashHandle, EffectAttributes, GraphicsBackend, IconId, IconTable, RenderingContext, RuleClass,
    ShaderHandle, StyleBuilder,
};

struct Canvas;

impl GraphicsBackend for Canvas {
    fn shader(&self, icon: IconId) -> Option<ShaderHandle> {
        Some(ShaderHandle(icon.0))
    }

    fn dash_pattern(&self, _pattern: &str) -> Option<DashHandle> {
        None
    }
}

fn main() {
    let icons = Arc::new(IconTable::new());
    let style = Arc::new(
        StyleBuilder::new(&*icons)
            .rule(RuleClass::Line, "highway", |r| {
                r.value("motorway")
                    .zoom(0, 9)
                    .main(EffectAttributes::new().color(0xFFE8_9240).stroke_width(1.0))
            })
            .rule(RuleClass::Line, "highway", |r| {
                r.value("motorway")
                    .min_zoom(10)
                    .main(EffectAttributes::new().color(0xFFE8_9240).stroke_width(4.0))
            })
            .build(),
    );

    // One style, one resolver per worker.
    let handles: Vec<_> = (0..4_u32)
        .map(|i| {
            let style = Arc::clone(&style);
            let icons = Arc::clone(&icons);
            thread::spawn(move || {
                let resolver = style.resolver(&*icons, &Canvas);
                let zoom = 6 + i * 2;
                let mut ctx = RenderingContext::new();
                let drawn = resolver.resolve_polyline("highway", "motorway", zoom, 0, &mut ctx);
                println!(
                    "Thread {i}: z{zoom} drawn={drawn} width={}",
                    ctx.primary.stroke_width
                );
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
