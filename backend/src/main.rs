mod config;
mod db;
mod error;
mod services;

use crate::config::AppConfig;
use crate::db::Database;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cfg = AppConfig::load().map_err(io::Error::other)?;
    env_logger::init_from_env(Env::default().default_filter_or(cfg.log_level.as_str()));

    let database = Database::open(&cfg.database_path).map_err(io::Error::other)?;
    info!("Using donation database {}", database.path().display());

    let (host, port) = cfg.bind_address();
    info!("Server running at http://{}:{}", host, port);

    let json_limit = cfg.json_limit_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(database.clone()))
            .service(services::providers::configure_routes())
            .service(services::receivers::configure_routes())
            .service(services::food_listings::configure_routes())
            .service(services::claims::configure_routes())
            .service(services::insights::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
