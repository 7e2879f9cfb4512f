use serde::Deserialize;
use serde::Serialize;

use crate::domain::author::models::Author;

pub mod create_author;
pub mod delete_author;
pub mod get_author;
pub mod list_authors;
pub mod update_author;

/// Request body for author creation and rename
#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&Author> for AuthorResponseData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.0,
            name: author.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorListResponseData {
    pub authors: Vec<AuthorResponseData>,
}
