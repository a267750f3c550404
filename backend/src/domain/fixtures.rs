//! Builders for domain values shared by unit tests.

use serde_json::{Value, json};

use super::user::{Comment, Fields, Post, User, UserId};

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}

pub(crate) fn user(id: i64) -> User {
    User {
        id: UserId::new(id),
        posts: Vec::new(),
        fields: fields(json!({
            "name": format!("User {id}"),
            "username": format!("user{id}"),
            "email": format!("user{id}@example.test"),
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })),
    }
}

pub(crate) fn post(id: i64, user_id: Option<i64>) -> Post {
    Post {
        user_id: user_id.map(UserId::new),
        id,
        comments: Vec::new(),
        fields: fields(json!({ "title": format!("post {id}"), "body": "body" })),
    }
}

pub(crate) fn comment(id: i64, post_id: Option<i64>) -> Comment {
    Comment {
        post_id,
        id,
        fields: fields(json!({
            "name": format!("comment {id}"),
            "email": "c@example.test",
            "body": "body"
        })),
    }
}
