//! Search term for name filtering
//!
//! Matching is a case-insensitive substring match on the item name. The
//! term is literal text: regex metacharacters typed by the user match
//! themselves.

/// Non-blank search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Build a term from the `q` query parameter.
    ///
    /// Absent or blank input means "no filter" and yields `None`.
    pub fn parse(q: Option<&str>) -> Option<Self> {
        let raw = q?.trim();
        if raw.is_empty() {
            return None;
        }

        Some(Self {
            raw: raw.to_owned(),
            folded: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `name` contains this term, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.folded)
    }

    /// Regex source for a `$regex` query that matches the term literally.
    pub fn to_pattern(&self) -> String {
        regex::escape(&self.raw)
    }
}
