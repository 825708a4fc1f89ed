use crate::db::Database;
use crate::error::ServiceError;
use crate::services::require_text;
use actix_web::{web, HttpResponse};
use common::model::provider::{Provider, ProviderForm};
use log::info;
use rusqlite::{params, Connection};

use super::get::get_provider;

/// Handler for `POST /api/providers`.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<ProviderForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let provider = create_provider(&conn, &payload)?;
    Ok(HttpResponse::Created().json(provider))
}

pub(super) fn validate(form: &ProviderForm) -> Result<(), ServiceError> {
    require_text("provider name", &form.name)
}

/// Inserts a provider and returns it with its generated identifier.
pub fn create_provider(conn: &Connection, form: &ProviderForm) -> Result<Provider, ServiceError> {
    validate(form)?;
    conn.execute(
        "INSERT INTO Providers (Name, Type, Address, City, Contact) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            form.name,
            form.provider_type,
            form.address,
            form.city,
            form.contact
        ],
    )?;
    let provider_id = conn.last_insert_rowid();
    info!("Provider {} created ({})", provider_id, form.name);
    get_provider(conn, provider_id)
}
