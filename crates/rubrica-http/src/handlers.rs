use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, Query};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use rubrica_core::{ContactDirectory, ContactKey, NewContact, PhoneEntry};

use crate::error::{ApiError, ApiResult};

/// Query string as raw pairs, in request order
///
/// Extracting pairs instead of a struct keeps repeated parameters from being
/// rejected before the directory sees the request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`, if any
pub fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Locator of the resource stored under `key`
pub fn location(key: &ContactKey) -> String {
    format!(
        "{}/{}/{}",
        crate::routes::BASE_PATH,
        urlencoding::encode(&key.surname),
        urlencoding::encode(&key.first_name)
    )
}

/// POST /rubrica?cognome=&nome=&numero=
pub async fn create_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<impl IntoResponse> {
    let request = NewContact {
        surname: first_value(&pairs, "cognome"),
        first_name: first_value(&pairs, "nome"),
        number: first_value(&pairs, "numero"),
    };
    let key = directory.add(request).await.map_err(ApiError::create)?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location(&key))]))
}

/// GET /rubrica
pub async fn list_contacts(
    Extension(directory): Extension<Arc<ContactDirectory>>,
) -> ApiResult<Json<Vec<PhoneEntry>>> {
    let entries = directory.list().await.map_err(ApiError::list)?;
    Ok(Json(entries))
}

/// GET /rubrica/{cognome}/{nome}
pub async fn get_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    Path((surname, first_name)): Path<(String, String)>,
) -> ApiResult<Json<PhoneEntry>> {
    let key = ContactKey::new(surname, first_name);
    let entry = directory.lookup(&key).await.map_err(ApiError::read)?;
    Ok(Json(entry))
}

/// PUT /rubrica/{cognome}/{nome}?numero=
pub async fn replace_number(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    Path((surname, first_name)): Path<(String, String)>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<impl IntoResponse> {
    let key = ContactKey::new(surname, first_name);
    directory
        .update(&key, first_value(&pairs, "numero"))
        .await
        .map_err(ApiError::replace)?;
    Ok((StatusCode::OK, "numero di telefono aggiornato"))
}

/// DELETE /rubrica/{cognome}/{nome}
pub async fn delete_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    Path((surname, first_name)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let key = ContactKey::new(surname, first_name);
    let removed = directory.remove(&key).await.map_err(ApiError::delete)?;
    Ok((StatusCode::OK, format!("{removed} eliminato dalla rubrica")))
}
