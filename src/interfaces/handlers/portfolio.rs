use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{catalog, errors::AppError};

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[instrument(skip(query))]
pub async fn list_projects(query: web::Query<ProjectFilter>) -> Result<impl Responder, AppError> {
    let projects = catalog::projects(query.category.as_deref(), query.featured);
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument]
pub async fn get_project(id: web::Path<String>) -> Result<impl Responder, AppError> {
    let project = catalog::project_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(HttpResponse::Ok().json(project))
}
