//! User, post and comment data model.
//!
//! Entities type only the keys the load joins on (`id`, `userId`, `postId`)
//! and keep every other source field untouched, so a stored user carries
//! whatever the remote source sent. `User::posts` and `Post::comments` are
//! empty on the flat entities returned by the remote source and filled in by
//! [`crate::domain::denormalize`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a user, the sole lookup key of the `users` collection.
///
/// # Examples
/// ```
/// use placeholder_mirror::domain::UserId;
///
/// let id: UserId = "42".parse().expect("digits parse");
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw integer identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw integer identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Source object fields kept verbatim beside the typed keys.
pub type Fields = Map<String, Value>;

/// Comment attached to a post through `post_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    pub id: i64,
    /// Name, email, body and anything else the source sends.
    #[serde(flatten)]
    pub fields: Fields,
}

/// Post authored by a user, with its comments embedded after a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub id: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Title, body and anything else the source sends.
    #[serde(flatten)]
    pub fields: Fields,
}

/// User profile, with its posts embedded after a load.
///
/// Only `id` is required. Profile fields (name, address, company and so on)
/// travel in `fields` exactly as the source sent them.
///
/// # Examples
/// ```
/// use placeholder_mirror::domain::User;
/// use serde_json::json;
///
/// let user: User = serde_json::from_value(json!({ "id": 2, "nickname": "Ada" }))
///     .expect("only id is required");
/// assert_eq!(user.fields.get("nickname"), Some(&json!("Ada")));
/// assert!(user.posts.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Profile fields, kept verbatim.
    #[serde(flatten)]
    pub fields: Fields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn flat_source_user_decodes_with_empty_posts() {
        let value = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "address": {
                "city": "Gwenborough",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "company": { "catchPhrase": "Multi-layered client-server neural-net" }
        });

        let user: User = serde_json::from_value(value.clone()).expect("user decodes");
        assert_eq!(user.id, UserId::new(1));
        assert!(user.posts.is_empty());

        let mut expected = value;
        expected["posts"] = json!([]);
        assert_eq!(serde_json::to_value(&user).expect("user serialises"), expected);
    }

    #[rstest]
    #[case::id_only(json!({ "id": 2 }))]
    #[case::partial_profile(json!({ "id": 2, "name": "n" }))]
    #[case::odd_types(json!({ "id": 2, "phone": 5_550_100, "address": null }))]
    fn users_need_only_an_id(#[case] value: Value) {
        let user: User = serde_json::from_value(value.clone()).expect("user decodes");
        assert_eq!(user.id, UserId::new(2));
        let round_tripped = serde_json::to_value(&user).expect("user serialises");
        for (key, field) in value.as_object().expect("object") {
            assert_eq!(round_tripped.get(key), Some(field), "{key} changed");
        }
    }

    #[rstest]
    fn unknown_fields_survive_on_every_entity() {
        let post: Post = serde_json::from_value(json!({
            "userId": 3, "id": 10, "title": "t", "draft": true
        }))
        .expect("post decodes");
        let comment: Comment = serde_json::from_value(json!({
            "postId": 10, "id": 100, "likes": 4
        }))
        .expect("comment decodes");

        assert_eq!(post.user_id, Some(UserId::new(3)));
        assert_eq!(post.fields.get("draft"), Some(&json!(true)));
        assert_eq!(comment.post_id, Some(10));
        assert_eq!(comment.fields.get("likes"), Some(&json!(4)));
    }

    #[rstest]
    fn post_keeps_camel_case_foreign_key() {
        let post = Post {
            user_id: Some(UserId::new(3)),
            id: 10,
            comments: Vec::new(),
            fields: Fields::new(),
        };

        let value = serde_json::to_value(&post).expect("post serialises");
        assert_eq!(value.get("userId"), Some(&json!(3)));
        assert!(value.get("user_id").is_none());
        assert_eq!(value.get("comments"), Some(&json!([])));
    }

    #[rstest]
    fn comment_without_post_id_omits_the_key() {
        let comment = Comment {
            post_id: None,
            id: 100,
            fields: Fields::new(),
        };

        let value = serde_json::to_value(&comment).expect("comment serialises");
        assert!(value.get("postId").is_none());
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("007", Some(7))]
    #[case("abc", None)]
    #[case("99999999999999999999", None)]
    fn user_id_parses_decimal_digits(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
    }
}
