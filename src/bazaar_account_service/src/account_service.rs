use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{get, post},
};
use bazaar_adapters::{
    config::AllowedOrigins,
    http::routes::{get_account_profile, sign_in, sign_up, update_account},
};
use bazaar_application::AccountProvisioning;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front for company account provisioning
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService around a provisioning implementation
    ///
    /// # Arguments
    /// * `provisioning` - Anything implementing `AccountProvisioning`, usually an
    ///   `AccountProvisioningService` wired with concrete adapters
    ///
    /// # Note on Architecture
    /// Every route shares the same `Arc` to the provisioning service; the service holds
    /// its repositories and is safe to call concurrently.
    pub fn new<P>(provisioning: P) -> Self
    where
        P: AccountProvisioning,
    {
        let router = Router::new()
            .route("/sign-up", post(sign_up::<P>))
            .route("/sign-in", post(sign_in::<P>))
            .route(
                "/companies/{id}",
                get(get_account_profile::<P>).patch(update_account::<P>),
            )
            .with_state(Arc::new(provisioning));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// An Axum Router that can be nested into another application
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the account service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
