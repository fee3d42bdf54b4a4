//! HTTP API Client
//!
//! Functions for communicating with the placeholder REST API. The API is an
//! external collaborator with a fixed contract; failures surface as plain
//! string errors and are handled (logged and swallowed) at the call site.

use gloo_net::http::Request;

use crate::state::global::{Comment, Post};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("feedboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("feedboard_api_url", url);
        }
    }
}

/// Create request body for a new post
#[derive(Debug, serde::Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Comment collection URL filtered to one post
pub fn comments_url(api_base: &str, post_id: u64) -> String {
    format!("{}/comments?postId={}", api_base, post_id)
}

/// Fetch the full post collection
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/posts", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a new post. The server echoes the submitted fields back together
/// with an assigned id; the echo carries no `likes` field, so the returned
/// post renders with zero likes.
pub async fn create_post(title: &str, body: &str, user_id: u64) -> Result<Post, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/posts", api_base))
        .json(&NewPost {
            title: title.to_string(),
            body: body.to_string(),
            user_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the comments for one post
pub async fn fetch_comments(post_id: u64) -> Result<Vec<Comment>, String> {
    let api_base = get_api_base();

    let response = Request::get(&comments_url(&api_base, post_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_url_carries_the_post_id_filter() {
        assert_eq!(
            comments_url("https://jsonplaceholder.typicode.com", 5),
            "https://jsonplaceholder.typicode.com/comments?postId=5"
        );
    }

    #[test]
    fn test_new_post_serializes_camel_case_user_id() {
        let body = serde_json::to_value(NewPost {
            title: "My Title".to_string(),
            body: String::new(),
            user_id: 1,
        })
        .unwrap();

        assert_eq!(body["userId"], 1);
        assert_eq!(body["title"], "My Title");
        assert_eq!(body["body"], "");
    }
}
