use std::fmt;
use std::time::Instant;

use tracing::info;

use super::class::RuleClass;
use super::error::RejectReason;
use super::registry::{GraphicsBackend, IconRegistry};
use super::repository::RuleRepository;
use super::rule::RuleDraft;
use crate::resolve::StyleResolver;

/// Identity of a loaded style and the base styles it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleMetadata {
    pub name: String,
    pub depends: Vec<String>,
}

impl Default for StyleMetadata {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            depends: Vec::new(),
        }
    }
}

/// Receiver for events emitted by a style-file parser.
pub trait RuleVisitor {
    /// Called once with the style's name and the base styles it depends on.
    fn on_style_metadata(&mut self, name: &str, depends: &[String]);

    /// Called for every parsed rule. Returns whether the rule was kept.
    fn on_rule_parsed(&mut self, class: RuleClass, draft: RuleDraft) -> bool;
}

/// Builder for a [`Style`].
///
/// Rule drafts are validated against the icon registry as they arrive; the
/// finished style is immutable.
///
/// # Example
///
/// ```
/// use cartostyle::{EffectAttributes, IconTable, RuleClass, StyleBuilder};
///
/// let icons = IconTable::new();
/// let style = StyleBuilder::new(&icons)
///     .rule(RuleClass::Line, "highway", |r| {
///         r.value("primary")
///             .zoom(4, 12)
///             .main(EffectAttributes::new().color(0xFFFF_0000))
///     })
///     .build();
/// assert_eq!(style.rules().len(), 1);
/// ```
#[derive(Debug)]
pub struct StyleBuilder<'i, I: IconRegistry> {
    icons: &'i I,
    metadata: StyleMetadata,
    rules: RuleRepository,
    rejected: usize,
    started: Instant,
}

impl<'i, I: IconRegistry> StyleBuilder<'i, I> {
    #[must_use]
    pub fn new(icons: &'i I) -> Self {
        Self {
            icons,
            metadata: StyleMetadata::default(),
            rules: RuleRepository::new(),
            rejected: 0,
            started: Instant::now(),
        }
    }

    /// Record the style's name and its declared base styles. Blank entries in
    /// `depends` are ignored.
    pub fn record_metadata<S: AsRef<str>>(
        &mut self,
        name: &str,
        depends: impl IntoIterator<Item = S>,
    ) {
        self.metadata.name = name.to_owned();
        self.metadata.depends.extend(
            depends
                .into_iter()
                .map(|d| d.as_ref().trim().to_owned())
                .filter(|d| !d.is_empty()),
        );
    }

    /// Register a rule draft. Returns `false` if it was rejected.
    pub fn add_rule(&mut self, class: RuleClass, draft: RuleDraft) -> bool {
        let accepted = self.rules.register(class, draft, self.icons);
        if !accepted {
            self.rejected += 1;
        }
        accepted
    }

    /// Register a rule draft, returning the assigned priority.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason`] if the draft is invalid.
    pub fn try_add_rule(&mut self, class: RuleClass, draft: RuleDraft) -> Result<u32, RejectReason> {
        self.rules
            .try_register(class, draft, self.icons)
            .inspect_err(|_| self.rejected += 1)
    }

    /// Define a rule fluently. The closure receives a draft for `tag`.
    #[must_use]
    pub fn rule(
        mut self,
        class: RuleClass,
        tag: &str,
        f: impl FnOnce(RuleDraft) -> RuleDraft,
    ) -> Self {
        self.add_rule(class, f(RuleDraft::new(tag)));
        self
    }

    /// Set the style name fluently.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.metadata.name = name.to_owned();
        self
    }

    /// Number of drafts rejected so far.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Freeze the registered rules into an immutable [`Style`].
    #[must_use]
    pub fn build(self) -> Style {
        info!(
            style = %self.metadata.name,
            rules = self.rules.len(),
            rejected = self.rejected,
            elapsed_ms = self.started.elapsed().as_millis(),
            "style built"
        );
        Style {
            metadata: self.metadata,
            rules: self.rules,
        }
    }
}

impl<I: IconRegistry> RuleVisitor for StyleBuilder<'_, I> {
    fn on_style_metadata(&mut self, name: &str, depends: &[String]) {
        self.record_metadata(name, depends);
    }

    fn on_rule_parsed(&mut self, class: RuleClass, draft: RuleDraft) -> bool {
        self.add_rule(class, draft)
    }
}

/// A loaded, immutable map style. Thread-safe and designed to live behind
/// `Arc`; switching styles means building a new one.
#[derive(Debug, Clone)]
pub struct Style {
    metadata: StyleMetadata,
    rules: RuleRepository,
}

impl Style {
    #[must_use]
    pub fn metadata(&self) -> &StyleMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    #[must_use]
    pub fn rules(&self) -> &RuleRepository {
        &self.rules
    }

    /// Bind this style to the collaborators needed to answer queries.
    #[must_use]
    pub fn resolver<'a, I, G>(&'a self, icons: &'a I, graphics: &'a G) -> StyleResolver<'a, I, G>
    where
        I: IconRegistry,
        G: GraphicsBackend,
    {
        StyleResolver::new(self, icons, graphics)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Style({}: {} point, {} line, {} polygon, {} text rules)",
            self.metadata.name,
            self.rules.class_len(RuleClass::Point),
            self.rules.class_len(RuleClass::Line),
            self.rules.class_len(RuleClass::Polygon),
            self.rules.class_len(RuleClass::Text),
        )
    }
}
