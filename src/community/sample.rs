//! Sample discussion data for the community feed

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

use super::{Comment, Post};

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub(super) fn seed() -> (Vec<Post>, HashMap<String, Vec<Comment>>) {
    let posts = vec![
        Post {
            id: "post-1".to_string(),
            user_id: "user-002".to_string(),
            user_name: "Sarah Chen".to_string(),
            user_avatar: None,
            title: "How to use React useEffect hook properly?".to_string(),
            content: "I'm struggling with the cleanup function in useEffect. My component is \
                      unmounting but I'm still seeing API calls. Can someone explain how to \
                      properly clean up effects?"
                .to_string(),
            tags: vec!["React".to_string(), "JavaScript".to_string(), "Hooks".to_string()],
            created_at: ts(2023, 8, 15, 14, 23),
            likes_count: 24,
            comments_count: 8,
            is_liked: true,
            is_bookmarked: false,
        },
        Post {
            id: "post-2".to_string(),
            user_id: "user-003".to_string(),
            user_name: "Michael Rodriguez".to_string(),
            user_avatar: None,
            title: "Best resources to learn TypeScript in 2023".to_string(),
            content: "I'm looking to learn TypeScript this year and wondering what resources \
                      others have found helpful. Books, courses, videos - any recommendations \
                      appreciated!"
                .to_string(),
            tags: vec![
                "TypeScript".to_string(),
                "Learning".to_string(),
                "Resources".to_string(),
            ],
            created_at: ts(2023, 8, 14, 9, 15),
            likes_count: 32,
            comments_count: 15,
            is_liked: false,
            is_bookmarked: true,
        },
        Post {
            id: "post-3".to_string(),
            user_id: "user-004".to_string(),
            user_name: "Alex Johnson".to_string(),
            user_avatar: None,
            title: "Solved: That tricky array sorting problem from LeetCode".to_string(),
            content: "I just spent 3 hours figuring out the optimal solution to the 'Merge K \
                      Sorted Arrays' problem. Here's my approach and why I think it's O(n log k) \
                      time complexity..."
                .to_string(),
            tags: vec![
                "Algorithms".to_string(),
                "LeetCode".to_string(),
                "JavaScript".to_string(),
                "Problem Solving".to_string(),
            ],
            created_at: ts(2023, 8, 13, 18, 45),
            likes_count: 56,
            comments_count: 12,
            is_liked: false,
            is_bookmarked: false,
        },
        Post {
            id: "post-4".to_string(),
            user_id: "user-005".to_string(),
            user_name: "Priya Patel".to_string(),
            user_avatar: None,
            title: "How do you handle state management in large React applications?".to_string(),
            content: "As my application grows, I find it harder to manage state effectively. \
                      I've tried Redux and Context API but I'm curious what approaches others \
                      are using in production..."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "State Management".to_string(),
                "Redux".to_string(),
                "Context API".to_string(),
            ],
            created_at: ts(2023, 8, 12, 11, 30),
            likes_count: 43,
            comments_count: 27,
            is_liked: false,
            is_bookmarked: false,
        },
    ];

    let mut comments = HashMap::new();
    comments.insert(
        "post-1".to_string(),
        vec![
            Comment {
                id: "comment-1".to_string(),
                post_id: "post-1".to_string(),
                user_id: "user-003".to_string(),
                user_name: "Michael Rodriguez".to_string(),
                user_avatar: None,
                content: "Make sure you return a cleanup function from your useEffect. Something \
                          like: useEffect(() => { const subscription = someAPI.subscribe(); \
                          return () => { subscription.unsubscribe(); }; }, []);"
                    .to_string(),
                created_at: ts(2023, 8, 15, 14, 45),
                likes_count: 12,
                is_liked: true,
            },
            Comment {
                id: "comment-2".to_string(),
                post_id: "post-1".to_string(),
                user_id: "user-004".to_string(),
                user_name: "Alex Johnson".to_string(),
                user_avatar: None,
                content: "Also check if you're using the dependencies array correctly. Missing \
                          dependencies can cause stale closures."
                    .to_string(),
                created_at: ts(2023, 8, 15, 15, 12),
                likes_count: 8,
                is_liked: false,
            },
        ],
    );

    (posts, comments)
}
