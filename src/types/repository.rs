use std::collections::HashMap;

use tracing::debug;

use super::class::RuleClass;
use super::error::RejectReason;
use super::registry::IconRegistry;
use super::rule::{Rule, RuleDraft};

/// Rules registered under one tag, split by value.
#[derive(Debug, Clone, Default)]
struct TagRules {
    by_value: HashMap<String, Vec<Rule>>,
    wildcard: Vec<Rule>,
}

impl TagRules {
    fn bucket(&self, value: Option<&str>) -> Option<&[Rule]> {
        match value {
            Some(v) => self.by_value.get(v).map(Vec::as_slice),
            None => (!self.wildcard.is_empty()).then_some(self.wildcard.as_slice()),
        }
    }

    fn bucket_mut(&mut self, value: Option<&str>) -> &mut Vec<Rule> {
        match value {
            Some(v) => self.by_value.entry(v.to_owned()).or_default(),
            None => &mut self.wildcard,
        }
    }

    fn len(&self) -> usize {
        self.wildcard.len() + self.by_value.values().map(Vec::len).sum::<usize>()
    }
}

/// Append-only index of style rules: class → tag → value → rules in
/// registration order.
///
/// Filled by a single writer, then shared read-only. Duplicate and overlapping
/// rules are legal; queries resolve them by registration order.
#[derive(Debug, Clone, Default)]
pub struct RuleRepository {
    classes: [HashMap<String, TagRules>; RuleClass::COUNT],
    next_priority: u32,
}

impl RuleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule draft, returning whether it was accepted.
    ///
    /// Rejected drafts are dropped and logged at debug level.
    pub fn register(
        &mut self,
        class: RuleClass,
        draft: RuleDraft,
        icons: &impl IconRegistry,
    ) -> bool {
        match self.try_register(class, draft, icons) {
            Ok(_) => true,
            Err(reason) => {
                debug!(%reason, "style rule rejected");
                false
            }
        }
    }

    /// Register a rule draft, returning the assigned priority.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason`] when the draft has no minimum zoom, or when a
    /// point rule's icon is missing from `icons`. The repository is unchanged
    /// in that case.
    pub fn try_register(
        &mut self,
        class: RuleClass,
        draft: RuleDraft,
        icons: &impl IconRegistry,
    ) -> Result<u32, RejectReason> {
        let priority = self.next_priority;
        let rule = crate::register::validate(class, draft, icons, priority)?;
        self.next_priority += 1;

        let tags = &mut self.classes[class.index()];
        let bucket = tags
            .entry(rule.tag.clone())
            .or_default()
            .bucket_mut(rule.value.as_deref());
        bucket.push(rule);
        Ok(priority)
    }

    /// The rules stored under `(class, tag, value)` in priority order.
    /// `value == None` selects the wildcard bucket.
    #[must_use]
    pub fn bucket(&self, class: RuleClass, tag: &str, value: Option<&str>) -> Option<&[Rule]> {
        self.classes[class.index()].get(tag)?.bucket(value)
    }

    #[must_use]
    pub fn bucket_len(&self, class: RuleClass, tag: &str, value: Option<&str>) -> usize {
        self.bucket(class, tag, value).map_or(0, <[Rule]>::len)
    }

    #[must_use]
    pub fn class_len(&self, class: RuleClass) -> usize {
        self.classes[class.index()].values().map(TagRules::len).sum()
    }

    /// Total number of stored rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.next_priority as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_priority == 0
    }
}
