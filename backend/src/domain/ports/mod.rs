//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod document_store;
mod placeholder_source;
mod users;

#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{Collection, DocumentFilter, DocumentStore, DocumentStoreError};
#[cfg(test)]
pub use placeholder_source::MockPlaceholderSource;
pub use placeholder_source::{PlaceholderSource, PlaceholderSourceError};
#[cfg(test)]
pub use users::{MockUsersCommand, MockUsersLoadCommand, MockUsersQuery};
pub use users::{LoadSummary, UsersCommand, UsersLoadCommand, UsersQuery};
