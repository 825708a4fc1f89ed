//! # Receiver Service
//!
//! CRUD endpoints for the `Receivers` table under `/api/receivers`. Same shape as
//! the provider service; receivers are the parties that file claims.

mod create;
mod delete;
mod get;
mod update;

pub use get::{get_receiver, list_receivers};

#[cfg(test)]
pub use {create::create_receiver, delete::delete_receiver, update::update_receiver};

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/receivers";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process_list))
        .route("", post().to(create::process))
        .route("/{receiver_id}", get().to(get::process))
        .route("/{receiver_id}", put().to(update::process))
        .route("/{receiver_id}", delete().to(delete::process))
}
