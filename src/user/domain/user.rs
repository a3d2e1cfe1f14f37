//! Team member record and its create/update payloads.

use super::{EmailAddress, UserId, UserName};
use serde::{Deserialize, Serialize};

/// A team member as confirmed by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    avatar: Option<String>,
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: UserId,
        name: UserName,
        email: EmailAddress,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            avatar,
        }
    }

    /// Materializes a newly created user with its store-assigned identifier.
    #[must_use]
    pub fn from_new(id: UserId, new_user: &NewUser) -> Self {
        Self {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            avatar: new_user.avatar.clone(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns `true` when the name or email contains `query`, ignoring case.
    ///
    /// An empty query matches every user.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.as_str().to_lowercase().contains(&needle)
            || self.email.as_str().contains(&needle)
    }

    /// Merges a partial update into this record.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar.clone_from(avatar);
        }
    }
}

/// Validated fields for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    name: UserName,
    email: EmailAddress,
    avatar: Option<String>,
}

impl NewUser {
    /// Creates a new-user payload.
    #[must_use]
    pub const fn new(name: UserName, email: EmailAddress) -> Self {
        Self {
            name,
            email,
            avatar: None,
        }
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

/// Partial update of a user; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<UserName>,
    email: Option<EmailAddress>,
    avatar: Option<Option<String>>,
}

impl UserPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display name.
    #[must_use]
    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = Some(name);
        self
    }

    /// Replaces the email address.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Replaces or clears the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Returns the replacement name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    /// Returns the replacement email, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the avatar change, if any.
    #[must_use]
    pub const fn avatar(&self) -> Option<&Option<String>> {
        self.avatar.as_ref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }
}
