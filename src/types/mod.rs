mod class;
mod context;
mod effect;
mod error;
mod registry;
mod repository;
mod rule;
mod style;
mod text;
mod zoom;

pub use class::RuleClass;
pub use context::{OPAQUE_BLACK, PaintProperties, RenderingContext};
pub use effect::{CapStyle, EffectAttributes};
pub use error::RejectReason;
pub use registry::{
    DashHandle, GraphicsBackend, IconId, IconRegistry, IconTable, ShaderHandle,
};
pub use repository::RuleRepository;
pub use rule::{Rule, RuleDraft};
pub use style::{RuleVisitor, Style, StyleBuilder, StyleMetadata};
pub use text::{RefMode, TextRule};
pub use zoom::ZoomRange;
