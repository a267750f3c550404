//! PostgreSQL-backed document store adapter.
//!
//! Each collection is a table of `(seq BIGSERIAL, document JSONB)` rows.
//! `seq` preserves insertion order and filters use JSONB containment, which
//! is exact equality for the scalar values the domain filters on.

use async_trait::async_trait;
use diesel::OptionalExtension as _;
use diesel::sql_query;
use diesel::sql_types::Jsonb;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, AsyncPgConnection, RunQueryDsl};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::Document;
use crate::domain::ports::{Collection, DocumentFilter, DocumentStore, DocumentStoreError};

use super::pool::{DbPool, PoolError};

/// Diesel-backed implementation of the document store port.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(diesel::QueryableByName)]
struct DocumentRow {
    #[diesel(sql_type = Jsonb)]
    document: Value,
}

fn map_pool_error(error: PoolError) -> DocumentStoreError {
    DocumentStoreError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> DocumentStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DocumentStoreError::duplicate(info.constraint_name().unwrap_or("unique key"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentStoreError::connection("database connection error")
        }
        DieselError::DeserializationError(_) => {
            DocumentStoreError::query("stored document could not be decoded")
        }
        _ => DocumentStoreError::query("database error"),
    }
}

fn filter_value(filter: &DocumentFilter) -> Value {
    Value::Object(filter.as_object().clone())
}

fn into_document(row: DocumentRow) -> Result<Document, DocumentStoreError> {
    match row.document {
        Value::Object(document) => Ok(document),
        other => Err(DocumentStoreError::query(format!(
            "stored document is not an object: {other}"
        ))),
    }
}

async fn delete_matching(
    conn: &mut AsyncPgConnection,
    collection: Collection,
    filter: &Value,
) -> diesel::QueryResult<usize> {
    sql_query(format!("DELETE FROM {collection} WHERE document @> $1"))
        .bind::<Jsonb, _>(filter)
        .execute(conn)
        .await
}

async fn insert_batch(
    conn: &mut AsyncPgConnection,
    collection: Collection,
    batch: &Value,
) -> diesel::QueryResult<usize> {
    sql_query(format!(
        "INSERT INTO {collection} (document) \
         SELECT element.value \
         FROM jsonb_array_elements($1) WITH ORDINALITY AS element(value, position) \
         ORDER BY element.position"
    ))
    .bind::<Jsonb, _>(batch)
    .execute(conn)
    .await
}

fn batch_value(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(Value::Object).collect())
}

#[async_trait]
impl DocumentStore for DieselDocumentStore {
    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = delete_matching(&mut conn, collection, &filter_value(filter))
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError> {
        if documents.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        insert_batch(&mut conn, collection, &batch_value(documents))
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        sql_query(format!("INSERT INTO {collection} (document) VALUES ($1)"))
            .bind::<Jsonb, _>(Value::Object(document))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DocumentRow> = sql_query(format!(
            "SELECT document FROM {collection} WHERE document @> $1 ORDER BY seq LIMIT 1"
        ))
        .bind::<Jsonb, _>(filter_value(filter))
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
        row.map(into_document).transpose()
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = sql_query(format!(
            "DELETE FROM {collection} WHERE seq = \
             (SELECT seq FROM {collection} WHERE document @> $1 ORDER BY seq LIMIT 1)"
        ))
        .bind::<Jsonb, _>(filter_value(filter))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }

    async fn replace_all(
        &self,
        cleared: &[Collection],
        target: Collection,
        documents: Vec<Document>,
    ) -> Result<(), DocumentStoreError> {
        let cleared = cleared.to_vec();
        let everything = Value::Object(Map::new());
        let batch = (!documents.is_empty()).then(|| batch_value(documents));

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                for collection in cleared {
                    delete_matching(conn, collection, &everything).await?;
                }
                if let Some(batch) = batch {
                    insert_batch(conn, target, &batch).await?;
                }
                Ok::<(), diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
