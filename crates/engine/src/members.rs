//! Trip members: stable identifiers and the roster records supplied by the
//! caller on every query.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a trip member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(Uuid);

impl MemberId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MemberId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A member of the trip. Immutable once created within a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Contact address (email in the observed data).
    pub contact: String,
    /// Avatar reference rendered by the presentation layer.
    pub avatar: String,
}

impl Member {
    pub fn new(name: impl Into<String>, contact: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            contact: contact.into(),
            avatar: avatar.into(),
        }
    }
}

/// Looks up a member's display name in the roster.
///
/// Returns `None` for an id the roster does not contain; the caller decides
/// on a fallback label ("Unknown" in the observed UI).
#[must_use]
pub fn display_name(members: &[Member], id: MemberId) -> Option<&str> {
    members
        .iter()
        .find(|member| member.id == id)
        .map(|member| member.name.as_str())
}
