//! User document shape and API DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Structured person name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PersonName {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Street within a postal address
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postcode varies by nationality: some generators emit numbers, others strings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

/// Postal address stored with each user
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

/// Stored credentials. Only the bcrypt hash is persisted, never the plaintext.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Credentials {
    pub uuid: String,
    pub username: String,
    pub hash: String,
}

/// Portrait URLs carried over from the generator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// A user document as stored in the collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub gender: String,
    pub name: PersonName,
    pub location: Location,
    pub login: Credentials,
    pub phone: String,
    pub nat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Credentials carried on a create request, with the plaintext password
/// the service hashes before storage. A missing uuid is minted server-side.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCredentials {
    #[serde(default)]
    #[validate(length(min = 1, message = "uuid must not be empty"))]
    pub uuid: Option<String>,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request body for POST /user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub gender: String,
    pub name: PersonName,
    pub location: Location,
    #[validate]
    pub login: NewCredentials,
    pub phone: String,
    pub nat: String,
    pub picture: Option<Picture>,
}

impl CreateUserRequest {
    /// Build the stored document, swapping the plaintext password for its hash
    pub fn into_record(self, hash: String) -> UserRecord {
        let uuid = self
            .login
            .uuid
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        UserRecord {
            email: self.email,
            gender: self.gender,
            name: self.name,
            location: self.location,
            login: Credentials {
                uuid,
                username: self.login.username,
                hash,
            },
            phone: self.phone,
            nat: self.nat,
            picture: self.picture,
        }
    }
}

/// Request body for POST /login. The `login` field carries the account email.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Pagination query parameters for GET /users
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    pub page: Option<u64>,
}

impl ListUsersParams {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    /// Effective page size, falling back to the default
    pub fn limit(&self) -> u64 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    /// Number of records to skip for the requested (zero-based) page
    pub fn skip(&self) -> u64 {
        self.limit() * self.page.unwrap_or(0)
    }
}

/// Listing entry for GET /users
#[derive(Debug, Serialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.login.uuid.clone(),
            username: user.login.username.clone(),
        }
    }
}

/// Personal section of the profile projection
#[derive(Debug, Serialize, PartialEq)]
pub struct PersonalInfo {
    pub gender: String,
    pub name: PersonName,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub nat: String,
}

/// Profile view returned by GET /user/:id and PATCH /user/me.
/// Credentials and portrait URLs are not exposed.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserProfile {
    pub personal: PersonalInfo,
    pub location: Location,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            personal: PersonalInfo {
                gender: user.gender,
                name: user.name,
                email: user.email,
                username: user.login.username,
                phone: user.phone,
                nat: user.nat,
            },
            location: user.location,
        }
    }
}
