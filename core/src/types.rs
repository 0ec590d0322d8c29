//! Request payloads sent to the ENSEK API.
//!
//! # Design
//! Only the request side is typed. Responses are asserted on by status and
//! read as text, with `HttpResponse::json` available for informal checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /ENSEK/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body of `PUT /ENSEK/orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUpdate {
    pub id: Uuid,
    pub quantity: u64,
    pub energy_id: u32,
}
