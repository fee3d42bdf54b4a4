//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::HashMap;

/// Global dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Posts fetched from the API plus locally submitted ones
    pub posts: RwSignal<Vec<Post>>,
    /// In-progress text for a not-yet-submitted post
    pub draft: RwSignal<String>,
    /// Current title search term
    pub search_term: RwSignal<String>,
    /// Comment panel visibility keyed by post id; absent means hidden
    pub show_comments: RwSignal<HashMap<u64, bool>>,
    /// Whether the initial post fetch is in flight
    pub loading: RwSignal<bool>,
}

/// Post as served by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
    /// Client-only like counter; the server neither sends nor stores it
    #[serde(default, skip_serializing)]
    pub likes: u32,
}

/// Comment on a post
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub body: String,
}

/// Posts whose title contains `term` as a case-insensitive substring,
/// in their original relative order. An empty term selects everything.
pub fn filter_by_title(posts: &[Post], term: &str) -> Vec<Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Increment the like counter of the post with `post_id`, if present.
/// Every other post is left untouched.
pub fn apply_like(posts: &mut [Post], post_id: u64) {
    if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
        post.likes += 1;
    }
}

/// Flip one post's comment visibility, treating a missing entry as hidden.
pub fn toggle_visibility(map: &mut HashMap<u64, bool>, post_id: u64) {
    let entry = map.entry(post_id).or_insert(false);
    *entry = !*entry;
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        posts: create_rw_signal(Vec::new()),
        draft: create_rw_signal(String::new()),
        search_term: create_rw_signal(String::new()),
        show_comments: create_rw_signal(HashMap::new()),
        loading: create_rw_signal(false),
    };

    provide_context(state);
}

impl DashboardState {
    /// Posts matching the current search term, in fetch order
    pub fn filtered_posts(&self) -> Vec<Post> {
        self.posts
            .with(|posts| self.search_term.with(|term| filter_by_title(posts, term)))
    }

    /// Increment a post's like counter. Purely local, never synced.
    pub fn like_post(&self, post_id: u64) {
        self.posts.update(|posts| apply_like(posts, post_id));
    }

    /// Flip the comment panel visibility for a post
    pub fn toggle_comments(&self, post_id: u64) {
        self.show_comments
            .update(|map| toggle_visibility(map, post_id));
    }

    /// Whether a post's comment panel is currently expanded
    pub fn comments_visible(&self, post_id: u64) -> bool {
        self.show_comments
            .with(|map| map.get(&post_id).copied().unwrap_or(false))
    }

    /// Append a freshly created post to the end of the list
    pub fn append_post(&self, post: Post) {
        self.posts.update(|posts| posts.push(post));
    }

    /// Diagnostic sink. Failures land here and are otherwise swallowed:
    /// no stored error state, no retry, no user-facing message.
    pub fn log_error(&self, context: &str, err: &str) {
        web_sys::console::error_1(&format!("{}: {}", context, err).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_string(),
            body: String::new(),
            likes: 0,
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let posts = vec![post(1, "Hello World")];
        let hits = filter_by_title(&posts, "hello");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_filter_miss_yields_empty() {
        let posts = vec![post(1, "Hello World")];
        assert!(filter_by_title(&posts, "xyz").is_empty());
    }

    #[test]
    fn test_filter_keeps_order_and_empty_term_matches_all() {
        let posts = vec![post(1, "alpha"), post(2, "beta"), post(3, "Alphabet")];

        let all = filter_by_title(&posts, "");
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let hits = filter_by_title(&posts, "ALPHA");
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_like_increments_only_the_match() {
        let mut posts = vec![post(1, "a"), post(2, "b")];

        apply_like(&mut posts, 1);
        assert_eq!(posts[0].likes, 1);
        assert_eq!(posts[1].likes, 0);

        apply_like(&mut posts, 1);
        assert_eq!(posts[0].likes, 2);
        assert_eq!(posts[1].likes, 0);
    }

    #[test]
    fn test_like_on_absent_id_is_a_noop() {
        let mut posts = vec![post(1, "a")];
        apply_like(&mut posts, 99);
        assert_eq!(posts[0].likes, 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut map = HashMap::new();

        toggle_visibility(&mut map, 5);
        assert_eq!(map.get(&5), Some(&true));

        toggle_visibility(&mut map, 5);
        assert_eq!(map.get(&5), Some(&false));
    }

    #[test]
    fn test_toggle_leaves_other_entries_alone() {
        let mut map = HashMap::from([(1u64, true)]);

        toggle_visibility(&mut map, 2);
        assert_eq!(map.get(&1), Some(&true));
        assert_eq!(map.get(&2), Some(&true));
    }

    #[test]
    fn test_post_payload_without_likes_defaults_to_zero() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"userId":1,"title":"Hello World","body":"text"}"#)
                .unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "Hello World");
    }

    #[test]
    fn test_likes_never_reach_the_wire() {
        let mut liked = post(1, "a");
        liked.likes = 3;
        let json = serde_json::to_string(&liked).unwrap();
        assert!(!json.contains("likes"));
    }

    #[test]
    fn test_comment_contact_fields_are_optional() {
        let comment: Comment =
            serde_json::from_str(r#"{"id":7,"postId":5,"body":"nice"}"#).unwrap();
        assert_eq!(comment.post_id, 5);
        assert!(comment.name.is_none());
        assert!(comment.email.is_none());
    }

    #[test]
    fn test_create_echo_decodes_with_server_id() {
        let created: Post =
            serde_json::from_str(r#"{"id":101,"title":"My Title","body":"","userId":1}"#).unwrap();
        assert_eq!(created.id, 101);
        assert_eq!(created.likes, 0);
    }
}
