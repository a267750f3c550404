//! Stored user document.
//!
//! A [`UserDocument`] is any JSON object whose top-level `id` is an integer.
//! Documents written through `PUT /users` are stored verbatim, so no other
//! field is validated or defaulted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::user::{User, UserId};

/// Raw JSON object as held by the document store.
pub type Document = Map<String, Value>;

/// Reasons a JSON value cannot be used as a user document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDocumentError {
    /// The value is not a JSON object.
    NotAnObject,
    /// The object has no `id`, or it is `null`.
    MissingId,
    /// The `id` is not an integer that fits in 64 bits.
    InvalidId,
    /// The bytes are not valid JSON.
    Decode(String),
    /// A typed user could not be turned into JSON.
    Encode(String),
}

impl fmt::Display for UserDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "user document must be a JSON object"),
            Self::MissingId => write!(f, "user document must contain an id"),
            Self::InvalidId => write!(f, "user document id must be a 64-bit integer"),
            Self::Decode(message) => write!(f, "user document is not valid JSON: {message}"),
            Self::Encode(message) => write!(f, "user document could not be encoded: {message}"),
        }
    }
}

impl std::error::Error for UserDocumentError {}

/// User document keyed by its integer `id`.
///
/// # Examples
/// ```
/// use placeholder_mirror::domain::{UserDocument, UserId};
/// use serde_json::json;
///
/// let doc = UserDocument::try_from(json!({ "id": 7, "name": "Ada" })).expect("valid");
/// assert_eq!(doc.id(), UserId::new(7));
/// assert_eq!(doc.as_document().get("name"), Some(&json!("Ada")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct UserDocument {
    id: UserId,
    fields: Document,
}

impl UserDocument {
    /// Identifier read from the document's `id` field.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Borrow the full document, including `id`.
    pub fn as_document(&self) -> &Document {
        &self.fields
    }

    /// Consume the wrapper and return the raw document.
    pub fn into_document(self) -> Document {
        self.fields
    }

    /// Encode a typed user (with its embedded posts) as a document.
    ///
    /// # Errors
    ///
    /// Returns [`UserDocumentError::Encode`] when serialisation fails.
    pub fn from_user(user: &User) -> Result<Self, UserDocumentError> {
        let value = serde_json::to_value(user)
            .map_err(|err| UserDocumentError::Encode(err.to_string()))?;
        Self::try_from(value)
    }

    /// Parse a request body into a document.
    ///
    /// # Errors
    ///
    /// Fails when the bytes are not JSON, not an object, or lack an integer
    /// `id`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UserDocumentError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| UserDocumentError::Decode(err.to_string()))?;
        Self::try_from(value)
    }
}

impl TryFrom<Document> for UserDocument {
    type Error = UserDocumentError;

    fn try_from(fields: Document) -> Result<Self, Self::Error> {
        let id = match fields.get("id") {
            None | Some(Value::Null) => return Err(UserDocumentError::MissingId),
            Some(Value::Number(number)) => number.as_i64().ok_or(UserDocumentError::InvalidId)?,
            Some(_) => return Err(UserDocumentError::InvalidId),
        };
        Ok(Self {
            id: UserId::new(id),
            fields,
        })
    }
}

impl TryFrom<Value> for UserDocument {
    type Error = UserDocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            _ => Err(UserDocumentError::NotAnObject),
        }
    }
}

impl From<UserDocument> for Value {
    fn from(value: UserDocument) -> Self {
        Self::Object(value.fields)
    }
}
