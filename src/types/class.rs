use std::fmt;

/// Geometry partition a rule is registered under.
///
/// Partitions are independent: the same tag/value pair may carry different
/// rules in each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleClass {
    Point,
    Line,
    Polygon,
    Text,
    /// Accepted and stored, but never consulted by any query.
    Reserved,
}

impl RuleClass {
    /// Number of partitions, used to size per-class storage.
    pub const COUNT: usize = 5;

    /// All partitions in index order.
    pub const ALL: [RuleClass; Self::COUNT] = [
        RuleClass::Point,
        RuleClass::Line,
        RuleClass::Polygon,
        RuleClass::Text,
        RuleClass::Reserved,
    ];

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            RuleClass::Point => 0,
            RuleClass::Line => 1,
            RuleClass::Polygon => 2,
            RuleClass::Text => 3,
            RuleClass::Reserved => 4,
        }
    }
}

impl fmt::Display for RuleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleClass::Point => "point",
            RuleClass::Line => "line",
            RuleClass::Polygon => "polygon",
            RuleClass::Text => "text",
            RuleClass::Reserved => "reserved",
        };
        f.write_str(name)
    }
}
