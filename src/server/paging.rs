//! Paged route wrapper
//!
//! Opting a GET route into pagination is a registration-time decision:
//! the endpoint supplies only a producer that turns its state and the
//! raw query arguments into a lazy record sequence, and the wrapper owns
//! parameter parsing, the engine run and the response envelope. Routes
//! registered without the wrapper are untouched.

use crate::core::error::PagingError;
use crate::core::record::Record;
use crate::query::paginate::run_paged;
use crate::query::request::{PageLimits, PageQuery, QueryArgs};
use crate::store::QuerySet;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::{MethodRouter, get};
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;

/// Wrap a producer into a paginated GET route with default page limits.
///
/// The producer receives the application state and the request's raw
/// query arguments, and returns the lazy sequence to page over. Domain
/// parameters (e.g. a name prefix) are read from [`QueryArgs`] inside
/// the producer; `page`, `pageSize`, `sortField`, `sortDirection` and
/// `filter` are consumed by the wrapper itself.
///
/// # Example
///
/// ```ignore
/// Router::new()
///     .route("/users", paged_get(|state: AppState, _args| async move {
///         Ok(state.users.query())
///     }))
///     .with_state(state);
/// ```
pub fn paged_get<S, T, F, Fut>(producer: F) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
    T: Record + Serialize,
    F: Fn(S, QueryArgs) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<QuerySet<T>>> + Send + 'static,
{
    paged_get_with(PageLimits::default(), producer)
}

/// Same as [`paged_get`], with explicit page limits (normally sourced
/// from [`PagingConfig`](crate::config::PagingConfig)).
pub fn paged_get_with<S, T, F, Fut>(limits: PageLimits, producer: F) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
    T: Record + Serialize,
    F: Fn(S, QueryArgs) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<QuerySet<T>>> + Send + 'static,
{
    get(
        move |State(state): State<S>, uri: Uri, Query(params): Query<HashMap<String, String>>| {
            let producer = producer.clone();
            async move {
                let args = QueryArgs::new(params);

                let page = match PageQuery::from_args(&args, &limits) {
                    Ok(page) => page,
                    Err(err) => return err.into_response_at(uri.path()),
                };

                let set = match producer(state, args).await {
                    Ok(set) => set,
                    Err(err) => {
                        tracing::error!(error = %err, path = uri.path(), "record producer failed");
                        return PagingError::from(err).into_response_at(uri.path());
                    }
                };

                match run_paged(set, &page).await {
                    Ok(result) => Json(result).into_response(),
                    Err(err) => {
                        if err.status_code().is_server_error() {
                            tracing::error!(error = %err, path = uri.path(), "paged request failed");
                        } else {
                            tracing::debug!(error = %err, path = uri.path(), "paged request rejected");
                        }
                        err.into_response_at(uri.path())
                    }
                }
            }
        },
    )
}
