//! Post editor form state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to the API payload only on save.

use backoffice_api_models::{EntityId, Post, PostInput};

/// Mutable post editor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFormState {
    /// Post being edited, `None` when composing a new one.
    pub editing: Option<EntityId>,
    /// Title input.
    pub title: String,
    /// Slug input; derived from the title when left blank.
    pub slug: String,
    /// Body input.
    pub content: String,
    /// Publish toggle.
    pub published: bool,
    /// Category id input.
    pub category_id: String,
}

impl PostFormState {
    /// Editor state for an existing post.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            editing: Some(post.id),
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            published: post.published,
            category_id: post.category_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Convert the form into a create/update payload.
    ///
    /// # Errors
    /// Returns a message when the title is blank or the category id is not a
    /// number.
    pub fn to_input(&self) -> Result<PostInput, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("title is required".to_string());
        }
        let slug = if self.slug.trim().is_empty() {
            slugify(title)
        } else {
            slugify(&self.slug)
        };
        let category = self.category_id.trim();
        let category_id = if category.is_empty() {
            None
        } else {
            Some(
                category
                    .parse::<EntityId>()
                    .map_err(|_| format!("category id must be a number: {category}"))?,
            )
        };
        Ok(PostInput {
            title: title.to_string(),
            slug,
            content: self.content.clone(),
            published: self.published,
            category_id,
        })
    }
}

/// Lowercase, hyphen-separated slug of `value`.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
