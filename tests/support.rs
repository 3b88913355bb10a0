#![allow(dead_code)]

use cartostyle::{DashHandle, GraphicsBackend, IconId, IconTable, ShaderHandle};

/// Backend that hands out shaders for every icon and dashes for a fixed set
/// of patterns.
#[derive(Debug, Default)]
pub struct TestBackend;

impl GraphicsBackend for TestBackend {
    fn shader(&self, icon: IconId) -> Option<ShaderHandle> {
        Some(ShaderHandle(1000 + icon.0))
    }

    fn dash_pattern(&self, pattern: &str) -> Option<DashHandle> {
        match pattern {
            "dash_5_5" => Some(DashHandle(55)),
            "dash_2_8" => Some(DashHandle(28)),
            _ => None,
        }
    }
}

/// Icons registered before any style is loaded.
pub fn icons() -> IconTable {
    [
        "fuel",
        "parking",
        "bus_stop",
        "hatch_military",
        "motorway_shield",
    ]
    .into_iter()
    .collect()
}
