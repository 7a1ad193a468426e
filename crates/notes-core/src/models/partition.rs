//! Visibility partitions

use std::fmt;

use super::Note;

/// Which half of the note set is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Partition {
    #[default]
    Active,
    Deleted,
}

impl Partition {
    /// Partition selected by the `show deleted` flag
    #[must_use]
    pub const fn from_show_deleted(show_deleted: bool) -> Self {
        if show_deleted {
            Self::Deleted
        } else {
            Self::Active
        }
    }

    #[must_use]
    pub const fn shows_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Deleted,
            Self::Deleted => Self::Active,
        }
    }

    /// Store path listing this partition
    #[must_use]
    pub const fn list_path(self) -> &'static str {
        match self {
            Self::Active => "/notes",
            Self::Deleted => "/notes/deleted",
        }
    }

    /// Whether `note` belongs on screen for this partition
    #[must_use]
    pub fn contains(self, note: &Note) -> bool {
        note.is_deleted() == self.shows_deleted()
    }

    /// Label of the control that switches away from this partition
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Active => "Show Deleted Notes",
            Self::Deleted => "Show Active Notes",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Deleted => f.write_str("deleted"),
        }
    }
}
