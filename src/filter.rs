//! Filter State
//!
//! The active visibility criterion and its per-item predicate.
//! Mutated only by the hash router.

/// Visibility criterion selected by the routing keyword
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// The three filter tabs in footer display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Map a routing keyword to a filter. Unrecognized keywords are
    /// not an error; they behave as "no filtering applied".
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Parse a full location hash (`#/<keyword>`); anything that does
    /// not match the pattern selects the default filter
    pub fn from_hash(hash: &str) -> Self {
        let keyword = hash.strip_prefix("#/").unwrap_or("");
        Self::from_keyword(keyword)
    }

    /// Hash link for the footer tab
    pub fn href(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Visibility predicate for an entry with the given completed flag:
    /// hidden when (not completed and filter = Completed) or
    /// (completed and filter = Active)
    pub fn is_hidden(self, completed: bool) -> bool {
        match self {
            Filter::All => false,
            Filter::Active => completed,
            Filter::Completed => !completed,
        }
    }
}
