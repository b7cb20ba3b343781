use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// Roles are stored as strings in the database; unknown values fall back to
/// `Client` so a bad row never grants administrator rights.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "Cliente")]
    Client,
    #[serde(rename = "Administrador")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Cliente",
            Self::Administrator => "Administrador",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "Administrador" => Self::Administrator,
            _ => Self::Client,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }
}

/// User account as exposed through the API. Never carries the password hash.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: Role::from_db(&entity.role),
        }
    }
}

/// Parameters for creating a new user account.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
