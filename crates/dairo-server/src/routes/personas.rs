use axum::Json;
use dairo_core::persona::{Persona, PersonaSummary};

/// `GET /personas`: every selectable persona, default first.
pub async fn list() -> Json<Vec<PersonaSummary>> {
    Json(Persona::all().iter().map(Persona::summary).collect())
}
