use crate::database::dao;
use crate::database::DbPool;
use dto::error_response::ErrorResponse;
use dto::lookup_response::LookupResponse;
use log::error;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

const MISSING_DOCUMENT_ERROR: &str = "Falta el parámetro documento";

/// Look a club member up by document number.
///
/// Answers every row of the clients/status/category join matching the
/// document exactly; an unknown document number is a successful answer with
/// an empty `data`.
#[get("/obtener-cliente/<document_number>")]
pub async fn obtain_client(
    pool: &State<DbPool>,
    document_number: &str,
) -> Result<Json<LookupResponse>, (Status, Json<ErrorResponse>)> {
    let mut connection = pool.get().map_err(|error| {
        error!("Can't get a connection from the pool\n{error:#?}");
        internal_error(error.to_string())
    })?;

    let records = dao::client::find_by_document_number(&mut connection, document_number)
        .map_err(|error| {
            error!("Lookup query failed [document: {document_number}]\n{error:#?}");
            internal_error(error.to_string())
        })?;

    Ok(Json(LookupResponse::new(true, records)))
}

/// The historical API answers 400, not 404, when the document number is left
/// out of the path.
#[get("/obtener-cliente")]
pub async fn obtain_client_without_document() -> (Status, Json<ErrorResponse>) {
    (
        Status::BadRequest,
        Json(ErrorResponse::new(MISSING_DOCUMENT_ERROR.to_owned())),
    )
}

fn internal_error(message: String) -> (Status, Json<ErrorResponse>) {
    (Status::InternalServerError, Json(ErrorResponse::new(message)))
}
