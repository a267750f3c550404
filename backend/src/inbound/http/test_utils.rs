//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};

use crate::domain::ports::{MockUsersCommand, MockUsersLoadCommand, MockUsersQuery};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::routes::build_app;
use crate::inbound::http::state::HttpState;

/// Mocked use-case ports; tests set expectations before building the app.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub(crate) load: MockUsersLoadCommand,
    pub(crate) users_query: MockUsersQuery,
    pub(crate) users: MockUsersCommand,
}

impl MockPorts {
    pub(crate) fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(self.load),
            Arc::new(self.users_query),
            Arc::new(self.users),
        );
        build_app(web::Data::new(state))
    }
}

/// Decode an `{"error": ...}` body and return its message.
pub(crate) async fn read_error_body(response: ServiceResponse) -> String {
    let body: ErrorBody = actix_test::read_body_json(response).await;
    body.error
}
