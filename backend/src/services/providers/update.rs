use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use common::model::provider::{Provider, ProviderForm};
use log::info;
use rusqlite::{params, Connection};

use super::create::validate;
use super::get::get_provider;

/// Handler for `PUT /api/providers/{provider_id}`.
pub async fn process(
    db: web::Data<Database>,
    provider_id: web::Path<i64>,
    payload: web::Json<ProviderForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let provider = update_provider(&conn, provider_id.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(provider))
}

pub fn update_provider(
    conn: &Connection,
    provider_id: i64,
    form: &ProviderForm,
) -> Result<Provider, ServiceError> {
    validate(form)?;
    let affected = conn.execute(
        "UPDATE Providers SET Name = ?1, Type = ?2, Address = ?3, City = ?4, Contact = ?5 \
         WHERE Provider_ID = ?6",
        params![
            form.name,
            form.provider_type,
            form.address,
            form.city,
            form.contact,
            provider_id
        ],
    )?;
    ensure_affected(affected, "provider", provider_id)?;
    info!("Provider {} updated", provider_id);
    get_provider(conn, provider_id)
}
