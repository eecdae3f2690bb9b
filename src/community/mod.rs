//! Community forum - in-memory feed of posts and comments
//!
//! Seeded with sample records and mutated entirely client-side: like and
//! bookmark toggles are boolean flips with a ±1 counter move, and new posts
//! or comments are fabricated locally after a fixed delay. The feed lives
//! for the session; nothing here is reconciled with a server.

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::auth::User;
use crate::config::LatencyConfig;

mod sample;

/// A forum post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    pub is_liked: bool,
}

/// Feed tabs, mirroring the forum's tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    #[default]
    Latest,
    Popular,
    Bookmarked,
}

impl std::str::FromStr for FeedTab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(FeedTab::Latest),
            "popular" => Ok(FeedTab::Popular),
            "bookmarked" => Ok(FeedTab::Bookmarked),
            other => bail!("Unknown tab '{}' (latest, popular, bookmarked)", other),
        }
    }
}

/// Session-scoped forum state
pub struct CommunityFeed {
    posts: Vec<Post>,
    comments: HashMap<String, Vec<Comment>>,
    latency: LatencyConfig,
}

impl CommunityFeed {
    /// Feed seeded with the sample discussion data
    pub fn with_sample_data(latency: LatencyConfig) -> Self {
        let (posts, comments) = sample::seed();
        Self { posts, comments, latency }
    }

    /// An empty feed
    pub fn empty(latency: LatencyConfig) -> Self {
        Self {
            posts: Vec::new(),
            comments: HashMap::new(),
            latency,
        }
    }

    /// Posts for a tab, optionally narrowed by a search query.
    ///
    /// Search matches title, content, tags, and author, case-insensitively.
    pub fn posts(&self, tab: FeedTab, query: Option<&str>) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| match query {
                Some(q) if !q.trim().is_empty() => {
                    let q = q.to_lowercase();
                    post.title.to_lowercase().contains(&q)
                        || post.content.to_lowercase().contains(&q)
                        || post.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
                        || post.user_name.to_lowercase().contains(&q)
                }
                _ => true,
            })
            .filter(|post| tab != FeedTab::Bookmarked || post.is_bookmarked)
            .collect();

        match tab {
            FeedTab::Popular => posts.sort_by(|a, b| b.likes_count.cmp(&a.likes_count)),
            FeedTab::Latest | FeedTab::Bookmarked => {
                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
        }
        posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Comments on a post, oldest first
    pub fn comments(&self, post_id: &str) -> &[Comment] {
        self.comments.get(post_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flip the like flag on a post, moving its counter by exactly one.
    ///
    /// Returns the new liked state.
    pub fn toggle_post_like(&mut self, post_id: &str) -> Result<bool> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown post: {}", post_id))?;
        post.is_liked = !post.is_liked;
        if post.is_liked {
            post.likes_count += 1;
        } else {
            post.likes_count = post.likes_count.saturating_sub(1);
        }
        Ok(post.is_liked)
    }

    /// Flip the bookmark flag on a post; returns the new state
    pub fn toggle_bookmark(&mut self, post_id: &str) -> Result<bool> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown post: {}", post_id))?;
        post.is_bookmarked = !post.is_bookmarked;
        Ok(post.is_bookmarked)
    }

    /// Flip the like flag on a comment; returns the new state
    pub fn toggle_comment_like(&mut self, post_id: &str, comment_id: &str) -> Result<bool> {
        let comments = self
            .comments
            .get_mut(post_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown post: {}", post_id))?;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown comment: {}", comment_id))?;
        comment.is_liked = !comment.is_liked;
        if comment.is_liked {
            comment.likes_count += 1;
        } else {
            comment.likes_count = comment.likes_count.saturating_sub(1);
        }
        Ok(comment.is_liked)
    }

    /// Append a fabricated comment and bump the post's comment counter
    pub async fn submit_comment(
        &mut self,
        author: &User,
        post_id: &str,
        content: &str,
    ) -> Result<&Comment> {
        if content.trim().is_empty() {
            bail!("Comment cannot be empty");
        }
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown post: {}", post_id))?;

        tokio::time::sleep(self.latency.community()).await;

        let comment = Comment {
            id: format!("comment-{}", uuid::Uuid::new_v4()),
            post_id: post_id.to_string(),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            content: content.trim().to_string(),
            created_at: Utc::now(),
            likes_count: 0,
            is_liked: false,
        };
        post.comments_count += 1;
        info!("New comment on {} by {}", post_id, author.name);

        let comments = self.comments.entry(post_id.to_string()).or_default();
        comments.push(comment);
        Ok(comments.last().unwrap())
    }

    /// Fabricate a post and prepend it to the feed.
    ///
    /// `tags` is the raw comma-separated form field; entries are trimmed and
    /// empties dropped.
    pub async fn submit_post(
        &mut self,
        author: &User,
        title: &str,
        content: &str,
        tags: &str,
    ) -> Result<&Post> {
        if title.trim().is_empty() || content.trim().is_empty() {
            bail!("Title and content are required");
        }

        tokio::time::sleep(self.latency.community()).await;

        let post = Post {
            id: format!("post-{}", uuid::Uuid::new_v4()),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tags: tags
                .split(',')
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            created_at: Utc::now(),
            likes_count: 0,
            comments_count: 0,
            is_liked: false,
            is_bookmarked: false,
        };
        info!("New post by {}: {}", author.name, post.title);

        // New posts go to the front of the feed
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }
}

/// Human relative-time label ("5 minutes ago") for feed timestamps
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp).max(Duration::zero());

    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return format!("{} seconds ago", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{} day{} ago", days, plural(days));
    }

    let months = days / 30;
    if months < 12 {
        return format!("{} month{} ago", months, plural(months));
    }

    let years = months / 12;
    format!("{} year{} ago", years, plural(years))
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sample_user;

    fn feed() -> CommunityFeed {
        CommunityFeed::with_sample_data(LatencyConfig::none())
    }

    #[tokio::test]
    async fn empty_feed_rejects_comments_on_unknown_posts() {
        let mut feed = CommunityFeed::empty(LatencyConfig::none());
        assert!(feed.posts(FeedTab::Latest, None).is_empty());
        let user = sample_user();
        assert!(feed.submit_comment(&user, "post-1", "hello").await.is_err());
    }

    #[test]
    fn sample_feed_is_seeded() {
        let feed = feed();
        assert_eq!(feed.posts(FeedTab::Latest, None).len(), 4);
        assert_eq!(feed.comments("post-1").len(), 2);
        assert!(feed.comments("post-2").is_empty());
    }

    #[test]
    fn like_toggle_moves_counter_by_one_each_way() {
        let mut feed = feed();
        // post-2 starts unliked with 32 likes
        let before = feed.post("post-2").unwrap().likes_count;

        assert!(feed.toggle_post_like("post-2").unwrap());
        assert_eq!(feed.post("post-2").unwrap().likes_count, before + 1);

        assert!(!feed.toggle_post_like("post-2").unwrap());
        assert_eq!(feed.post("post-2").unwrap().likes_count, before);
    }

    #[test]
    fn unliking_a_seeded_like_decrements() {
        let mut feed = feed();
        // post-1 is seeded liked with 24 likes
        assert!(feed.post("post-1").unwrap().is_liked);
        assert!(!feed.toggle_post_like("post-1").unwrap());
        assert_eq!(feed.post("post-1").unwrap().likes_count, 23);
    }

    #[test]
    fn comment_like_toggles_too() {
        let mut feed = feed();
        let before = feed.comments("post-1")[1].likes_count;
        assert!(feed.toggle_comment_like("post-1", "comment-2").unwrap());
        assert_eq!(feed.comments("post-1")[1].likes_count, before + 1);
        assert!(!feed.toggle_comment_like("post-1", "comment-2").unwrap());
        assert_eq!(feed.comments("post-1")[1].likes_count, before);
    }

    #[test]
    fn bookmark_is_a_pure_flag_flip() {
        let mut feed = feed();
        let likes = feed.post("post-3").unwrap().likes_count;
        assert!(feed.toggle_bookmark("post-3").unwrap());
        assert!(feed.post("post-3").unwrap().is_bookmarked);
        // Counter untouched
        assert_eq!(feed.post("post-3").unwrap().likes_count, likes);
    }

    #[test]
    fn unknown_ids_error() {
        let mut feed = feed();
        assert!(feed.toggle_post_like("post-999").is_err());
        assert!(feed.toggle_comment_like("post-1", "comment-999").is_err());
    }

    #[tokio::test]
    async fn new_posts_are_prepended() {
        let mut feed = feed();
        let user = sample_user();
        feed.submit_post(&user, "My first post", "Hello everyone", "Intro, , Rust ")
            .await
            .unwrap();

        let posts = feed.posts(FeedTab::Latest, None);
        assert_eq!(posts[0].title, "My first post");
        assert_eq!(posts[0].tags, vec!["Intro", "Rust"]);
        assert_eq!(posts[0].likes_count, 0);
    }

    #[tokio::test]
    async fn blank_posts_are_rejected() {
        let mut feed = feed();
        let user = sample_user();
        assert!(feed.submit_post(&user, "  ", "body", "").await.is_err());
        assert!(feed.submit_post(&user, "title", "\t", "").await.is_err());
    }

    #[tokio::test]
    async fn comments_append_and_bump_the_counter() {
        let mut feed = feed();
        let user = sample_user();
        let before = feed.post("post-1").unwrap().comments_count;

        feed.submit_comment(&user, "post-1", "Great question!").await.unwrap();

        assert_eq!(feed.post("post-1").unwrap().comments_count, before + 1);
        let comments = feed.comments("post-1");
        assert_eq!(comments.last().unwrap().content, "Great question!");
        assert_eq!(comments.last().unwrap().user_name, user.name);
    }

    #[tokio::test]
    async fn blank_comments_are_rejected() {
        let mut feed = feed();
        let user = sample_user();
        assert!(feed.submit_comment(&user, "post-1", "   ").await.is_err());
    }

    #[test]
    fn tabs_filter_and_sort() {
        let feed = feed();

        let latest = feed.posts(FeedTab::Latest, None);
        assert_eq!(latest[0].id, "post-1"); // newest sample post

        let popular = feed.posts(FeedTab::Popular, None);
        assert_eq!(popular[0].id, "post-3"); // 56 likes

        let bookmarked = feed.posts(FeedTab::Bookmarked, None);
        assert_eq!(bookmarked.len(), 1);
        assert_eq!(bookmarked[0].id, "post-2");
    }

    #[test]
    fn search_matches_title_content_tags_and_author() {
        let feed = feed();
        assert_eq!(feed.posts(FeedTab::Latest, Some("useEffect")).len(), 1);
        assert_eq!(feed.posts(FeedTab::Latest, Some("redux")).len(), 1);
        assert_eq!(feed.posts(FeedTab::Latest, Some("sarah")).len(), 1);
        assert!(feed.posts(FeedTab::Latest, Some("nonexistent")).is_empty());
    }

    #[test]
    fn relative_time_labels() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::seconds(30), now), "30 seconds ago");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative(now - Duration::days(2), now), "2 days ago");
        assert_eq!(format_relative(now - Duration::days(45), now), "1 month ago");
        assert_eq!(format_relative(now - Duration::days(400), now), "1 year ago");
    }
}
