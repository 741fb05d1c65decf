//! The user record and its role/status enums.
//!
//! `User` is the shape a real directory service would return; the seed
//! fixture in [`crate::fixture`] stands in for that service. The `selected`
//! flag is view-local bookkeeping and is skipped during serialization.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when parsing a role or status from a string that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value: {0}")]
pub struct UnknownValue(pub String);

/// Role of a user within the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Moderator,
}

impl UserRole {
    /// All roles, in the order the filter dropdown offers them.
    pub const ALL: [Self; 3] = [Self::Admin, Self::User, Self::Moderator];

    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Moderator => "moderator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            other => Err(UnknownValue(other.to_owned())),
        }
    }
}

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    /// All statuses, in the order the filter dropdown offers them.
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            other => Err(UnknownValue(other.to_owned())),
        }
    }
}

/// A single user record in the directory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique id, immutable after creation.
    pub id: u32,
    /// Display name, required non-empty.
    pub name: String,
    /// Email address, required with a basic `local@domain` shape.
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    /// Avatar URI, system-assigned and preserved across edits.
    pub avatar: String,
    /// Set at creation time, untouched by edits.
    pub last_login: DateTime<Utc>,
    /// Row-selection flag, scoped to the current filtered view.
    #[serde(skip)]
    pub selected: bool,
}

impl User {
    /// Allocate the id for a new record: one past the highest id in the
    /// store, starting at 1 when the store is empty.
    pub fn next_id(users: &[User]) -> u32 {
        users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
    }

    /// Generated placeholder avatar keyed by the uppercased first letter of
    /// the name. The endpoint is treated as an opaque URI.
    pub fn placeholder_avatar(name: &str) -> String {
        let initial = name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        format!("https://via.placeholder.com/40/007bff/ffffff?text={initial}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn status_round_trips_through_wire_name() {
        for status in UserStatus::ALL {
            assert_eq!(status.as_str().parse::<UserStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_role_is_an_error() {
        let err = "superadmin".parse::<UserRole>().unwrap_err();
        assert_eq!(err, UnknownValue("superadmin".to_owned()));
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let users = crate::fixture::seed_users();
        assert_eq!(User::next_id(&users), 9);
    }

    #[test]
    fn next_id_starts_at_one_for_empty_store() {
        assert_eq!(User::next_id(&[]), 1);
    }

    #[test]
    fn next_id_ignores_order() {
        let mut users = crate::fixture::seed_users();
        users.swap(0, 7);
        assert_eq!(User::next_id(&users), 9);
    }

    #[test]
    fn placeholder_avatar_uses_uppercased_initial() {
        let avatar = User::placeholder_avatar("test user");
        assert!(avatar.ends_with("text=T"));
    }

    #[test]
    fn selected_flag_is_not_serialized() {
        let mut user = crate::fixture::seed_users().remove(0);
        user.selected = true;
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("selected"));
    }
}
