//! Users domain services.
//!
//! [`UsersService`] serves the read, create and delete use cases against the
//! document store. [`UsersLoadService`] refreshes the store from the remote
//! placeholder source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    Collection, DocumentFilter, DocumentStore, DocumentStoreError, LoadSummary, PlaceholderSource,
    PlaceholderSourceError, UsersCommand, UsersLoadCommand, UsersQuery,
};
use crate::domain::{Error, UserDocument, UserId, denormalize};

const USER_NOT_FOUND: &str = "User not found";
const USER_EXISTS: &str = "User already exists";

fn map_store_error(error: DocumentStoreError) -> Error {
    match error {
        DocumentStoreError::Connection { message } => {
            Error::internal(format!("document store unavailable: {message}"))
        }
        DocumentStoreError::Query { message } => {
            Error::internal(format!("document store error: {message}"))
        }
        DocumentStoreError::Duplicate { message } => {
            Error::internal(format!("unexpected duplicate document: {message}"))
        }
    }
}

/// Users service implementing the read and write driving ports.
#[derive(Clone)]
pub struct UsersService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> UsersService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UsersQuery for UsersService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn get_user(&self, id: UserId) -> Result<UserDocument, Error> {
        let document = self
            .store
            .find_one(Collection::Users, &DocumentFilter::user_id(id))
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        UserDocument::try_from(document)
            .map_err(|err| Error::internal(format!("stored user {id} is malformed: {err}")))
    }
}

#[async_trait]
impl<S> UsersCommand for UsersService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn delete_all_users(&self) -> Result<(), Error> {
        let removed = self
            .store
            .delete_many(Collection::Users, &DocumentFilter::all())
            .await
            .map_err(map_store_error)?;
        debug!(removed, "deleted all users");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .store
            .delete_one(Collection::Users, &DocumentFilter::user_id(id))
            .await
            .map_err(map_store_error)?;
        if removed == 0 {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(())
    }

    async fn create_user(&self, user: UserDocument) -> Result<UserDocument, Error> {
        let filter = DocumentFilter::user_id(user.id());
        let existing = self
            .store
            .find_one(Collection::Users, &filter)
            .await
            .map_err(map_store_error)?;
        if existing.is_some() {
            return Err(Error::conflict(USER_EXISTS));
        }

        match self
            .store
            .insert_one(Collection::Users, user.as_document().clone())
            .await
        {
            Ok(()) => Ok(user),
            // A concurrent insert can win between the lookup and the write.
            Err(DocumentStoreError::Duplicate { .. }) => Err(Error::conflict(USER_EXISTS)),
            Err(err) => Err(map_store_error(err)),
        }
    }
}

/// Load service refreshing the users collection from the remote source.
#[derive(Clone)]
pub struct UsersLoadService<P: ?Sized, S: ?Sized> {
    source: Arc<P>,
    store: Arc<S>,
}

impl<P: ?Sized, S: ?Sized> UsersLoadService<P, S> {
    /// Create a new load service from a remote source and a store.
    pub fn new(source: Arc<P>, store: Arc<S>) -> Self {
        Self { source, store }
    }
}

fn map_source_error(error: PlaceholderSourceError) -> Error {
    Error::internal(format!("placeholder fetch failed: {error}"))
}

#[async_trait]
impl<P, S> UsersLoadCommand for UsersLoadService<P, S>
where
    P: PlaceholderSource + ?Sized,
    S: DocumentStore + ?Sized,
{
    async fn load(&self) -> Result<LoadSummary, Error> {
        let (users, posts, comments) = tokio::try_join!(
            self.source.fetch_users(),
            self.source.fetch_posts(),
            self.source.fetch_comments(),
        )
        .map_err(map_source_error)?;
        debug!(
            users = users.len(),
            posts = posts.len(),
            comments = comments.len(),
            "fetched placeholder collections"
        );

        let nested = denormalize(users, &posts, &comments);
        let summary = LoadSummary {
            users: nested.len(),
            posts: nested.iter().map(|user| user.posts.len()).sum(),
            comments: nested
                .iter()
                .flat_map(|user| &user.posts)
                .map(|post| post.comments.len())
                .sum(),
        };
        let documents = nested
            .iter()
            .map(|user| UserDocument::from_user(user).map(UserDocument::into_document))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::internal(format!("failed to encode user document: {err}")))?;

        self.store
            .replace_all(&Collection::ALL, Collection::Users, documents)
            .await
            .map_err(map_store_error)?;

        info!(
            users = summary.users,
            posts = summary.posts,
            comments = summary.comments,
            "placeholder data loaded"
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
