use std::fmt;

/// Inclusive zoom interval a rule applies to.
///
/// `max == None` means the range is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl ZoomRange {
    #[must_use]
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Build a range from raw ingestion bounds where `-1` marks an unset value.
    ///
    /// Returns `None` when the minimum is unset (any negative value). A
    /// negative maximum means unbounded.
    #[must_use]
    pub fn from_raw(min: i32, max: i32) -> Option<Self> {
        let min = u32::try_from(min).ok()?;
        Some(Self {
            min,
            max: u32::try_from(max).ok(),
        })
    }

    #[must_use]
    pub fn contains(&self, zoom: u32) -> bool {
        self.min <= zoom && self.max.is_none_or(|max| zoom <= max)
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}
