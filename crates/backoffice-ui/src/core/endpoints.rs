//! Backend endpoint paths.
//!
//! Paths are relative to [`crate::core::config::ApiConfig::base_url`].

use backoffice_api_models::EntityId;

/// Sign-in endpoint.
pub const SIGN_IN: &str = "/auth/signin";
/// GraphQL endpoint.
pub const GRAPHQL: &str = "/graphql";
/// User collection.
pub const USERS: &str = "/users";
/// Post collection.
pub const POSTS: &str = "/posts";

/// Filters for the post listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// One-based page number.
    pub page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
}

/// Post listing path with optional page and search parameters.
#[must_use]
pub fn posts_path(query: &PostQuery) -> String {
    let mut params = Vec::new();
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    if let Some(search) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
    {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if params.is_empty() {
        POSTS.to_string()
    } else {
        format!("{POSTS}?{}", params.join("&"))
    }
}

/// Single post path.
#[must_use]
pub fn post_path(id: EntityId) -> String {
    format!("{POSTS}/{id}")
}

/// GraphQL document for the signed-in user.
pub const CURRENT_USER_QUERY: &str = "query CurrentUser { me { id email name role } }";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_posts_path_has_no_query() {
        assert_eq!(posts_path(&PostQuery::default()), "/posts");
    }

    #[test]
    fn posts_path_encodes_search() {
        let query = PostQuery {
            page: Some(2),
            search: Some("rust & wasm".to_string()),
        };
        assert_eq!(posts_path(&query), "/posts?page=2&search=rust%20%26%20wasm");
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = PostQuery {
            page: None,
            search: Some("   ".to_string()),
        };
        assert_eq!(posts_path(&query), "/posts");
    }

    #[test]
    fn post_path_appends_id() {
        assert_eq!(post_path(17), "/posts/17");
    }
}
