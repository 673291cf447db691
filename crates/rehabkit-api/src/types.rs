//! Typed request and response structures for the RehabKit API
//!
//! All wire fields are camelCase. Server-managed fields (ids, timestamps)
//! deserialize to defaults when absent so partial payloads decode cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope returned by every RehabKit endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A platform user (clinician, admin, provider staff)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            name: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: String::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Postal address attached to a client record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A client (patient) undergoing rehabilitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: String,
    pub address: Address,
    pub medical_history: String,
    pub notes: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            gender: String::new(),
            address: Address::default(),
            medical_history: String::new(),
            notes: String::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A single exercise within a program
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Seconds
    pub duration: u32,
    pub repetitions: u32,
    pub sets: u32,
    /// Seconds of rest between sets
    pub rest_time: u32,
    /// Position within the program
    pub order: u32,
}

/// A rehabilitation program assembled from exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    /// Minutes
    pub duration: u32,
    pub is_template: bool,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub exercises: Vec<Exercise>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            difficulty: String::new(),
            duration: 0,
            is_template: false,
            is_active: true,
            created_by: String::new(),
            created_at: None,
            updated_at: None,
            exercises: Vec::new(),
        }
    }
}

/// Credentials submitted to the login endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Payload for creating a platform user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub password: String,
}

/// Tokens issued by login and refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<User>,
}
