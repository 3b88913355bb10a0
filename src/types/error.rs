use thiserror::Error;

use super::RuleClass;

/// Why a rule draft was not added to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{class} rule for tag '{tag}' has no minimum zoom")]
    MissingMinZoom { class: RuleClass, tag: String },

    #[error("point rule for tag '{tag}' declares no icon")]
    MissingIcon { tag: String },

    #[error("point rule for tag '{tag}' references unknown icon '{icon}'")]
    UnresolvedIcon { tag: String, icon: String },
}
