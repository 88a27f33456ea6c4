use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier issued by the store on insert.
pub type UserId = i64;

/// Represents a registered user in the system.
///
/// Plain data holder: construction and mutation never fail, and nothing here
/// checks that `name` or `email` are filled in. The store enforces that on
/// insert (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `email` - User's email address
    ///
    /// # Notes
    /// The `id` field starts out absent and is assigned by the store.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Only the store should call this; the entity never generates ids itself.
    pub fn set_id(&mut self, id: Option<UserId>) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}

impl From<User> for UserCreate {
    // the id of an unsaved user is meaningless to the store
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "User{{id={id}, ")?,
            None => write!(f, "User{{id=null, ")?,
        }
        write!(f, "name='{}', email='{}'}}", self.name, self.email)
    }
}
