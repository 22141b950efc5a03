pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::store::RosterStore;

/// Builds the full application router around an explicit store so tests can
/// construct isolated instances.
pub fn app(store: Arc<RosterStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity/unregister",
            post(routes::activities::unregister_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
