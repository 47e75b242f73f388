//! ServerBuilder for fluent API to build HTTP servers

use crate::core::record::Record;
use crate::query::paginate::verify;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for assembling the HTTP application
///
/// Routers are merged in registration order; tracing and CORS layers are
/// applied to the assembled application. Record types registered with
/// [`with_record`](Self::with_record) are checked for a usable default
/// sort, so wiring defects fail the build instead of the first request.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_record::<UserSummary>()?
///     .with_routes(user_routes)
///     .build();
/// ```
pub struct ServerBuilder {
    routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a router to the server
    ///
    /// The router must already carry its state (`.with_state(...)`).
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.routes.push(routes);
        self
    }

    /// Register a record type, verifying its paging wiring.
    ///
    /// Fails when the type's declared default sort field is not in its
    /// field registry.
    pub fn with_record<T: Record>(self) -> Result<Self> {
        verify::<T>()?;
        tracing::debug!(resource = T::resource_name(), "registered record type");
        Ok(self)
    }

    /// Build the final router with tracing and CORS applied
    pub fn build(self) -> Router {
        let mut app = Router::new();
        for routes in self.routes {
            app = app.merge(routes);
        }

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_record::<UserSummary>()?
    ///     .with_routes(routes)
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
