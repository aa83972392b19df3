//! Wire shapes for the random-user generator API
//!
//! The generator returns far more than we store (dob, registered, cell,
//! coordinates, timezone, a plaintext password). Only the fields the
//! collection keeps are deserialized here; the remap drops the rest.

use serde::Deserialize;

use crate::models::{Credentials, Location, PersonName, Picture, UserRecord};

/// Envelope around a generator response
#[derive(Debug, Deserialize)]
pub struct RandomUserBatch {
    pub results: Vec<RandomUser>,
}

/// Login block as served by the generator, password still in plaintext
#[derive(Debug, Deserialize)]
pub struct SourceLogin {
    pub uuid: String,
    pub username: String,
    pub password: String,
}

/// One generated user
#[derive(Debug, Deserialize)]
pub struct RandomUser {
    pub gender: String,
    pub name: PersonName,
    pub location: Location,
    pub email: String,
    pub login: SourceLogin,
    pub phone: String,
    pub nat: String,
    pub picture: Option<Picture>,
}

impl RandomUser {
    /// Flat remap from the generator's shape to the stored document,
    /// swapping the plaintext password for its bcrypt hash
    pub fn into_record(self, hash: String) -> UserRecord {
        UserRecord {
            email: self.email,
            gender: self.gender,
            name: self.name,
            location: self.location,
            login: Credentials {
                uuid: self.login.uuid,
                username: self.login.username,
                hash,
            },
            phone: self.phone,
            nat: self.nat,
            picture: self.picture,
        }
    }
}
