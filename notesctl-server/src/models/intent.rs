//! Form intent - which mutation a submission performs

/// Mutation requested by a form submission.
///
/// Both pages post to themselves; the `intent` field tells a delete button
/// apart from the save button. Anything other than `delete` saves (create on
/// the list page, update on the detail page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Save,
    Delete,
}

impl Intent {
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("delete") => Self::Delete,
            _ => Self::Save,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delete() {
        assert_eq!(Intent::from_field(Some("delete")), Intent::Delete);
    }

    #[test]
    fn everything_else_saves() {
        assert_eq!(Intent::from_field(None), Intent::Save);
        assert_eq!(Intent::from_field(Some("update")), Intent::Save);
        assert_eq!(Intent::from_field(Some("")), Intent::Save);
    }
}
