use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{catalog, errors::AppError};

#[instrument(skip(query))]
pub async fn list_posts(
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let category = query.get("category").map(String::as_str);
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(10)
        .min(50);

    let posts = catalog::posts(category, limit);
    Ok(HttpResponse::Ok().json(posts))
}
