//! Laborer lookup endpoint.
//!
//! ```text
//! GET /laborers?id=1
//! GET /laborers?name=Ada
//! GET /laborers?email=a@x.com
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Laborer, LaborerFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, LaborerSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::filter_error;

/// Query parameters for `GET /laborers`.
///
/// When several are supplied, `id` wins over `name`, which wins over
/// `email`. Blank values count as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LaborerLookupQuery {
    /// Integer laborer identifier.
    pub id: Option<String>,
    /// Exact display name.
    pub name: Option<String>,
    /// Exact email address.
    pub email: Option<String>,
}

impl TryFrom<&LaborerLookupQuery> for LaborerFilter {
    type Error = crate::domain::Error;

    fn try_from(query: &LaborerLookupQuery) -> Result<Self, Self::Error> {
        Self::from_query(
            query.id.as_deref(),
            query.name.as_deref(),
            query.email.as_deref(),
        )
        .map_err(filter_error)
    }
}

/// Look up laborers by a single field.
#[utoipa::path(
    get,
    path = "/laborers",
    params(LaborerLookupQuery),
    responses(
        (status = 200, description = "Matching laborers ordered by id", body = [LaborerSchema]),
        (
            status = 400,
            description = "No filter supplied or id is not an integer",
            body = ErrorSchema
        ),
        (status = 404, description = "No laborer matched", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["laborers"],
    operation_id = "lookupLaborers"
)]
#[get("/laborers")]
pub async fn lookup_laborers(
    state: web::Data<HttpState>,
    query: web::Query<LaborerLookupQuery>,
) -> ApiResult<web::Json<Vec<Laborer>>> {
    let filter = LaborerFilter::try_from(&query.into_inner())?;
    let laborers = state.laborers.lookup(&filter).await?;
    Ok(web::Json(laborers))
}
