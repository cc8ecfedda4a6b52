use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Access role of a Clinova user.
///
/// The backend stores roles as bare integer codes; they are decoded into
/// this closed set exactly once, when a profile is deserialized, and every
/// later check matches on the variant. An unknown code is a decode error,
/// not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Therapist,
    Patient,
}

impl Role {
    pub fn from_code(code: u8) -> Result<Self, CoreError> {
        match code {
            1 => Ok(Role::Admin),
            4 => Ok(Role::Therapist),
            6 => Ok(Role::Patient),
            other => Err(CoreError::UnknownRole(other)),
        }
    }

    /// Wire code the backend expects.
    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Therapist => 4,
            Role::Patient => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Therapist => "Therapist",
            Role::Patient => "Patient",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Role::from_code(code).map_err(serde::de::Error::custom)
    }
}

/// A Clinova user record as served by the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub uid: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "rol")]
    #[ts(type = "number")]
    pub role: Role,
    #[serde(rename = "tipo_terapeuta", default)]
    pub therapist_type: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Personal fields submitted when a profile is first created, right after
/// the identity provider account exists.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProfile {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}
