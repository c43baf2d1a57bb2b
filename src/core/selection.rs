//! Selection state for the split-bill target.
//!
//! Selection is a two-state machine: no friend targeted, or exactly one.
//! The only pure transition is [`Selection::toggle`]; adding a friend or
//! splitting a bill forces the state back to [`Selection::None`] from the
//! store side.

use super::friend::FriendId;
use serde::{Deserialize, Serialize};

/// The friend currently targeted for a bill split, or none.
///
/// # Example
///
/// ```rust
/// use tally::core::{FriendId, Selection};
///
/// let sarah = FriendId::new("933372");
/// let selection = Selection::None.toggle(sarah.clone());
/// assert_eq!(selection.selected_id(), Some(&sarah));
///
/// // Toggling the same id again clears the selection.
/// let selection = selection.toggle(sarah);
/// assert_eq!(selection, Selection::None);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Selection {
    /// No friend targeted.
    #[default]
    None,
    /// Exactly one friend targeted.
    Selected(FriendId),
}

impl Selection {
    /// State name for logging and diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Selected(_) => "selected",
        }
    }

    /// Whether a friend is currently targeted.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// The targeted friend's id, if any.
    pub fn selected_id(&self) -> Option<&FriendId> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(id),
        }
    }

    /// Pure toggle transition.
    ///
    /// Selecting the currently selected id clears the selection; any other
    /// id becomes the new selection.
    #[must_use]
    pub fn toggle(&self, id: FriendId) -> Self {
        match self {
            Self::Selected(current) if *current == id => Self::None,
            _ => Self::Selected(id),
        }
    }
}
