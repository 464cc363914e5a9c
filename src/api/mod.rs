//! Remote Todo API
//!
//! Bindings to the note-taking service, organized like the endpoints.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CreatedRecord, NoteId, NoteRecord};

pub use http::HttpApi;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub value: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteArgs<'a> {
    pub value: &'a str,
    pub priority: u32,
}

// ========================
// Trait
// ========================

/// Remote note service. Every method after `login` takes the bearer token.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Exchange credentials for an access token
    async fn login(&self, credentials: &str) -> Result<String>;

    /// All notes of the authenticated user, in server order
    async fn list_notes(&self, token: &str) -> Result<Vec<NoteRecord>>;

    async fn create_note(&self, token: &str, args: &NoteArgs<'_>) -> Result<CreatedRecord>;

    async fn delete_note(&self, token: &str, id: &NoteId) -> Result<()>;

    async fn update_note(&self, token: &str, id: &NoteId, args: &NoteArgs<'_>) -> Result<()>;

    async fn toggle_note(&self, token: &str, id: &NoteId) -> Result<()>;
}
