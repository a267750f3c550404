//! In-process document store.
//!
//! Used when no database URL is configured and by tests that exercise the
//! HTTP surface end to end. Every collection lives behind one mutex, so each
//! primitive and every [`DocumentStore::replace_all`] call is atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Document;
use crate::domain::ports::{Collection, DocumentFilter, DocumentStore, DocumentStoreError};

type Collections = HashMap<Collection, Vec<Document>>;

/// Document store keeping each collection as an insertion-ordered list.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<Collections>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document in `collection`, in insertion order.
    pub async fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .lock()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn ensure_unique(
    existing: &[Document],
    collection: Collection,
    incoming: &[Document],
) -> Result<(), DocumentStoreError> {
    let Some(key) = collection.unique_key() else {
        return Ok(());
    };
    let mut seen = Vec::with_capacity(incoming.len());
    for document in incoming {
        let Some(value) = document.get(key) else {
            continue;
        };
        let taken = seen.contains(&value) || existing.iter().any(|doc| doc.get(key) == Some(value));
        if taken {
            return Err(DocumentStoreError::duplicate(format!(
                "{collection}.{key} = {value}"
            )));
        }
        seen.push(value);
    }
    Ok(())
}

fn insert(
    collections: &mut Collections,
    collection: Collection,
    documents: Vec<Document>,
) -> Result<(), DocumentStoreError> {
    let stored = collections.entry(collection).or_default();
    ensure_unique(stored, collection, &documents)?;
    stored.extend(documents);
    Ok(())
}

fn remove_matching(
    collections: &mut Collections,
    collection: Collection,
    filter: &DocumentFilter,
) -> u64 {
    let Some(stored) = collections.get_mut(&collection) else {
        return 0;
    };
    let before = stored.len();
    stored.retain(|document| !filter.matches(document));
    (before - stored.len()) as u64
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut collections = self.collections.lock().await;
        Ok(remove_matching(&mut collections, collection, filter))
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.lock().await;
        insert(&mut collections, collection, documents)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.lock().await;
        insert(&mut collections, collection, vec![document])
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(&collection)
            .and_then(|stored| stored.iter().find(|document| filter.matches(document)))
            .cloned())
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut collections = self.collections.lock().await;
        let Some(stored) = collections.get_mut(&collection) else {
            return Ok(0);
        };
        match stored.iter().position(|document| filter.matches(document)) {
            Some(index) => {
                stored.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn replace_all(
        &self,
        cleared: &[Collection],
        target: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.lock().await;
        let mut staged = collections.clone();
        for collection in cleared {
            staged.remove(collection);
        }
        insert(&mut staged, target, documents)?;
        *collections = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    fn document(value: Value) -> Document {
        value.as_object().cloned().expect("test documents are objects")
    }

    #[fixture]
    fn store() -> InMemoryDocumentStore {
        InMemoryDocumentStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn find_one_returns_first_match_in_insertion_order(store: InMemoryDocumentStore) {
        store
            .insert_many(
                Collection::Posts,
                vec![
                    document(json!({ "id": 1, "tag": "a" })),
                    document(json!({ "id": 2, "tag": "a" })),
                ],
            )
            .await
            .expect("insert succeeds");

        let found = store
            .find_one(Collection::Posts, &DocumentFilter::field("tag", "a"))
            .await
            .expect("query succeeds");
        assert_eq!(found, Some(document(json!({ "id": 1, "tag": "a" }))));
    }

    #[rstest]
    #[tokio::test]
    async fn users_reject_duplicate_ids(store: InMemoryDocumentStore) {
        store
            .insert_one(Collection::Users, document(json!({ "id": 1, "name": "Ada" })))
            .await
            .expect("first insert succeeds");

        let err = store
            .insert_one(Collection::Users, document(json!({ "id": 1, "name": "Eve" })))
            .await
            .expect_err("duplicate rejected");
        assert!(matches!(err, DocumentStoreError::Duplicate { .. }));

        let kept = store
            .find_one(Collection::Users, &DocumentFilter::user_id(UserId::new(1)))
            .await
            .expect("query succeeds")
            .expect("original kept");
        assert_eq!(kept.get("name"), Some(&json!("Ada")));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicates_within_one_batch_are_rejected_atomically(store: InMemoryDocumentStore) {
        let err = store
            .insert_many(
                Collection::Users,
                vec![document(json!({ "id": 4 })), document(json!({ "id": 4 }))],
            )
            .await
            .expect_err("batch rejected");
        assert!(matches!(err, DocumentStoreError::Duplicate { .. }));
        assert!(store.documents(Collection::Users).await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_one_removes_a_single_match(store: InMemoryDocumentStore) {
        store
            .insert_many(
                Collection::Comments,
                vec![document(json!({ "postId": 1 })), document(json!({ "postId": 1 }))],
            )
            .await
            .expect("insert succeeds");
        let filter = DocumentFilter::field("postId", 1);

        assert_eq!(store.delete_one(Collection::Comments, &filter).await.ok(), Some(1));
        assert_eq!(store.documents(Collection::Comments).await.len(), 1);
        assert_eq!(store.delete_many(Collection::Comments, &filter).await.ok(), Some(1));
        assert_eq!(store.delete_one(Collection::Comments, &filter).await.ok(), Some(0));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_all_clears_every_named_collection(store: InMemoryDocumentStore) {
        for collection in Collection::ALL {
            store
                .insert_one(collection, document(json!({ "id": 99 })))
                .await
                .expect("seed succeeds");
        }

        store
            .replace_all(
                &Collection::ALL,
                Collection::Users,
                vec![document(json!({ "id": 1 })), document(json!({ "id": 2 }))],
            )
            .await
            .expect("replace succeeds");

        let users = store.documents(Collection::Users).await;
        assert_eq!(users, vec![document(json!({ "id": 1 })), document(json!({ "id": 2 }))]);
        assert!(store.documents(Collection::Posts).await.is_empty());
        assert!(store.documents(Collection::Comments).await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn failed_replace_leaves_previous_state(store: InMemoryDocumentStore) {
        store
            .insert_one(Collection::Users, document(json!({ "id": 7 })))
            .await
            .expect("seed succeeds");

        store
            .replace_all(
                &Collection::ALL,
                Collection::Users,
                vec![document(json!({ "id": 1 })), document(json!({ "id": 1 }))],
            )
            .await
            .expect_err("duplicate batch fails");

        assert_eq!(
            store.documents(Collection::Users).await,
            vec![document(json!({ "id": 7 }))]
        );
    }
}
