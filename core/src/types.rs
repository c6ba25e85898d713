//! The task DTO exchanged with the todo API.
//!
//! # Design
//! The upstream service emits `id` and `userId` as JSON numbers while the
//! client treats both as opaque strings. Decoding accepts either form;
//! encoding always writes strings. `completed` is also accepted under the
//! older `finished` name.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identity used for per-item operations. Omitted from request bodies
    /// when empty so the server can assign one on create.
    #[serde(deserialize_with = "string_or_number", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub title: String,
    #[serde(alias = "finished")]
    pub completed: bool,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            completed,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}
