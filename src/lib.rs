//! Map style resolution.
//!
//! A [`Style`] indexes style rules by geometry class, tag and value. A
//! [`StyleResolver`] answers per-feature queries against it, writing paint and
//! label attributes into a caller-owned [`RenderingContext`].
//!
//! ```
//! use cartostyle::{
//!     DashHandle, EffectAttributes, GraphicsBackend, IconId, IconTable, RenderingContext,
//!     RuleClass, ShaderHandle, StyleBuilder,
//! };
//!
//! struct Headless;
//!
//! impl GraphicsBackend for Headless {
//!     fn shader(&self, _: IconId) -> Option<ShaderHandle> {
//!         None
//!     }
//!     fn dash_pattern(&self, _: &str) -> Option<DashHandle> {
//!         None
//!     }
//! }
//!
//! let icons = IconTable::new();
//! let style = StyleBuilder::new(&icons)
//!     .rule(RuleClass::Line, "highway", |r| {
//!         r.value("primary")
//!             .zoom(4, 12)
//!             .main(EffectAttributes::new().color(0xFFFF_0000))
//!     })
//!     .build();
//!
//! let mut ctx = RenderingContext::new();
//! let resolver = style.resolver(&icons, &Headless);
//! assert!(resolver.resolve_polyline("highway", "primary", 8, 0, &mut ctx));
//! assert_eq!(ctx.primary.color, 0xFFFF_0000);
//! ```

pub mod attr;
mod error;
mod register;
mod resolve;
mod types;

pub use error::StyleError;
pub use resolve::StyleResolver;
pub use types::{
    CapStyle, DashHandle, EffectAttributes, GraphicsBackend, IconId, IconRegistry, IconTable,
    OPAQUE_BLACK, PaintProperties, RefMode, RejectReason, RenderingContext, Rule, RuleClass,
    RuleDraft, RuleRepository, RuleVisitor, ShaderHandle, Style, StyleBuilder, StyleMetadata,
    TextRule, ZoomRange,
};
