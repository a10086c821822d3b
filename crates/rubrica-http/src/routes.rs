use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post};
use rubrica_core::ContactDirectory;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Mount point of the directory resource
pub const BASE_PATH: &str = "/rubrica";

/// Build the router serving the directory under [`BASE_PATH`]
pub fn router(directory: Arc<ContactDirectory>) -> Router {
    Router::new()
        .route(
            BASE_PATH,
            post(handlers::create_contact).get(handlers::list_contacts),
        )
        .route(
            &format!("{BASE_PATH}/{{cognome}}/{{nome}}"),
            get(handlers::get_contact)
                .put(handlers::replace_number)
                .delete(handlers::delete_contact),
        )
        .layer(Extension(directory))
        .layer(TraceLayer::new_for_http())
}
