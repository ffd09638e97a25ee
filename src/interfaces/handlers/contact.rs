use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactForm, errors::AppError, utils::client_ip::client_identifier,
    AppState,
};

#[instrument(skip(req, state, form))]
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let identifier = client_identifier(&req);

    let response = state
        .contact_handler
        .submit(&identifier, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
