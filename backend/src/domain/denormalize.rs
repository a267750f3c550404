//! Embedding of posts and comments into user documents.

use std::collections::HashMap;

use super::user::{Comment, Post, User, UserId};

/// Number of source users kept by a load, taken from the head of the list.
pub const LOADED_USER_LIMIT: usize = 10;

/// Nest `comments` under their posts and `posts` under their users.
///
/// Keeps the first [`LOADED_USER_LIMIT`] users in source order. A user's
/// posts are exactly the posts whose `userId` equals the user's `id`, and a
/// post's comments are exactly the comments whose `postId` equals the post's
/// `id`; both keep their source relative order. Any `posts` or `comments`
/// already present on the inputs are replaced.
///
/// # Examples
/// ```
/// use placeholder_mirror::domain::{denormalize, Comment, Post};
/// use serde_json::json;
///
/// let orphan: Post = serde_json::from_value(json!({ "id": 1, "title": "orphan" }))
///     .expect("post decodes");
/// let posts = vec![orphan];
/// let nested = denormalize(Vec::new(), &posts, &Vec::<Comment>::new());
/// assert!(nested.is_empty());
/// ```
pub fn denormalize(users: Vec<User>, posts: &[Post], comments: &[Comment]) -> Vec<User> {
    let mut comments_by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        if let Some(post_id) = comment.post_id {
            comments_by_post
                .entry(post_id)
                .or_default()
                .push(comment.clone());
        }
    }

    let mut posts_by_user: HashMap<UserId, Vec<Post>> = HashMap::new();
    for post in posts {
        if let Some(user_id) = post.user_id {
            let mut embedded = post.clone();
            embedded.comments = comments_by_post.get(&post.id).cloned().unwrap_or_default();
            posts_by_user.entry(user_id).or_default().push(embedded);
        }
    }

    users
        .into_iter()
        .take(LOADED_USER_LIMIT)
        .map(|mut user| {
            user.posts = posts_by_user.get(&user.id).cloned().unwrap_or_default();
            user
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{comment, post, user};
    use rstest::rstest;

    fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
        items.iter().map(id).collect()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(10, 10)]
    #[case(15, 10)]
    fn keeps_at_most_the_first_ten_users(#[case] available: i64, #[case] expected: usize) {
        let users = (1..=available).map(user).collect();
        let nested = denormalize(users, &[], &[]);

        assert_eq!(nested.len(), expected);
        let expected_ids: Vec<i64> = (1..=available).take(expected).collect();
        assert_eq!(ids(&nested, |u| u.id.get()), expected_ids);
    }

    #[rstest]
    fn truncation_follows_source_order_not_id_order() {
        let users = (1..=12).rev().map(user).collect();
        let nested = denormalize(users, &[], &[]);
        assert_eq!(ids(&nested, |u| u.id.get()), (3..=12).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn embeds_posts_and_comments_by_foreign_key() {
        let users = (1..=15).map(user).collect();
        let posts = vec![post(10, Some(3)), post(12, Some(4)), post(11, Some(3))];
        let comments = vec![comment(100, Some(10)), comment(101, Some(12))];

        let nested = denormalize(users, &posts, &comments);
        assert_eq!(nested.len(), 10);

        let third = nested.iter().find(|u| u.id == UserId::new(3)).expect("user 3");
        assert_eq!(ids(&third.posts, |p| p.id), vec![10, 11]);
        assert_eq!(ids(&third.posts[0].comments, |c| c.id), vec![100]);
        assert!(third.posts[1].comments.is_empty());

        let fourth = nested.iter().find(|u| u.id == UserId::new(4)).expect("user 4");
        assert_eq!(ids(&fourth.posts[0].comments, |c| c.id), vec![101]);
    }

    #[rstest]
    fn preserves_source_relative_order_of_children() {
        let users = vec![user(1)];
        let posts = vec![post(5, Some(1)), post(2, Some(1)), post(9, Some(1))];
        let comments = vec![
            comment(30, Some(2)),
            comment(10, Some(5)),
            comment(20, Some(2)),
            comment(15, Some(5)),
        ];

        let nested = denormalize(users, &posts, &comments);
        let posts = &nested[0].posts;
        assert_eq!(ids(posts, |p| p.id), vec![5, 2, 9]);
        assert_eq!(ids(&posts[0].comments, |c| c.id), vec![10, 15]);
        assert_eq!(ids(&posts[1].comments, |c| c.id), vec![30, 20]);
        assert!(posts[2].comments.is_empty());
    }

    #[rstest]
    fn children_without_foreign_keys_are_dropped() {
        let users = vec![user(1)];
        let posts = vec![post(1, None), post(2, Some(1))];
        let comments = vec![comment(1, None), comment(2, Some(2))];

        let nested = denormalize(users, &posts, &comments);
        assert_eq!(ids(&nested[0].posts, |p| p.id), vec![2]);
        assert_eq!(ids(&nested[0].posts[0].comments, |c| c.id), vec![2]);
    }

    #[rstest]
    fn prefilled_children_are_replaced() {
        let mut stale_user = user(1);
        stale_user.posts = vec![post(99, Some(1))];
        let mut stale_post = post(1, Some(1));
        stale_post.comments = vec![comment(99, Some(1))];

        let nested = denormalize(vec![stale_user], &[stale_post], &[]);
        assert_eq!(ids(&nested[0].posts, |p| p.id), vec![1]);
        assert!(nested[0].posts[0].comments.is_empty());
    }

    #[rstest]
    fn embedded_children_keep_their_foreign_keys() {
        let nested = denormalize(
            vec![user(1)],
            &[post(7, Some(1))],
            &[comment(70, Some(7))],
        );
        let embedded = &nested[0].posts[0];
        assert_eq!(embedded.user_id, Some(UserId::new(1)));
        assert_eq!(embedded.comments[0].post_id, Some(7));
    }
}
