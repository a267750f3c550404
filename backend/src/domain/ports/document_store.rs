//! Driven port for the document store backing the mirrored collections.
//!
//! The store exposes collection-level primitives keyed by exact-match
//! filters. Adapters decide how documents are persisted; the domain only
//! relies on the per-call atomicity of each primitive and on
//! [`DocumentStore::replace_all`] for the reload sequence.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{Document, UserId};

use super::define_port_error;

/// Named collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Denormalised user documents.
    Users,
    /// Flat posts; cleared on load, never repopulated.
    Posts,
    /// Flat comments; cleared on load, never repopulated.
    Comments,
}

impl Collection {
    /// Every collection, in declaration order.
    pub const ALL: [Self; 3] = [Self::Users, Self::Posts, Self::Comments];

    /// Storage name of the collection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
            Self::Comments => "comments",
        }
    }

    /// Top-level field whose value must be unique within the collection.
    pub const fn unique_key(self) -> Option<&'static str> {
        match self {
            Self::Users => Some("id"),
            Self::Posts | Self::Comments => None,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match filter over top-level document fields.
///
/// The empty filter matches every document.
///
/// # Examples
/// ```
/// use placeholder_mirror::domain::ports::DocumentFilter;
/// use serde_json::json;
///
/// let filter = DocumentFilter::field("id", 3);
/// let doc = json!({ "id": 3, "name": "Ada" });
/// assert!(filter.matches(doc.as_object().expect("object")));
/// assert!(DocumentFilter::all().matches(doc.as_object().expect("object")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    fields: Map<String, Value>,
}

impl DocumentFilter {
    /// Filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching documents whose `name` field equals `value`.
    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(name, value)
    }

    /// Filter matching the user document with the given identifier.
    pub fn user_id(id: UserId) -> Self {
        Self::field("id", id.get())
    }

    /// Add another exact-match condition.
    #[must_use]
    pub fn and(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Whether the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Conditions as a JSON object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Check a document against every condition.
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(name, expected)| document.get(name) == Some(expected))
    }
}

define_port_error! {
    /// Errors surfaced by document store adapters.
    pub enum DocumentStoreError {
        /// The store could not be reached.
        Connection { message: String } =>
            "document store connection failed: {message}",
        /// An operation failed while executing.
        Query { message: String } =>
            "document store operation failed: {message}",
        /// An insert collided with an existing unique key.
        Duplicate { message: String } =>
            "document store rejected duplicate document: {message}",
    }
}

/// Port for collection-level document persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Delete every document matching `filter`, returning the number removed.
    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError>;

    /// Insert documents in order.
    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError>;

    /// Insert one document.
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), DocumentStoreError>;

    /// Return the first document (in insertion order) matching `filter`.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Delete at most one document matching `filter`, returning 0 or 1.
    async fn delete_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError>;

    /// Empty every collection in `cleared`, then insert `documents` into
    /// `target`.
    ///
    /// The default sequences the primitives without isolation: a failure part
    /// way through leaves the cleared collections empty. Adapters with
    /// transactions override this to apply the whole sequence atomically.
    async fn replace_all(
        &self,
        cleared: &[Collection],
        target: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError> {
        let everything = DocumentFilter::all();
        for collection in cleared {
            self.delete_many(*collection, &everything).await?;
        }
        if documents.is_empty() {
            return Ok(());
        }
        self.insert_many(target, documents).await
    }
}
