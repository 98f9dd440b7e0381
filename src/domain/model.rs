use serde::Serialize;

/// Views of an article on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRecord {
    /// `YYYY-MM-DD`, copied verbatim from the page.
    pub date: String,
    pub count: u64,
}

impl ViewRecord {
    pub fn new(date: impl Into<String>, count: u64) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

/// Records in the order the page lists them.
pub type Series = Vec<ViewRecord>;
