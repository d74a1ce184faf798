#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{InMemoryRecordStore, dataset::load_dataset};
#[cfg(feature = "server")]
use crate::routes::search::search_users;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

/// Loads the dataset, logging and keeping an unavailable store on failure.
#[cfg(feature = "server")]
pub fn open_record_store(dataset_path: &str) -> InMemoryRecordStore {
    let loaded = load_dataset(dataset_path).inspect_err(|err| {
        log::error!("Failed to load dataset {dataset_path}: {err}");
    });
    InMemoryRecordStore::from(loaded)
}

/// Registers the search route and its shared state on an Actix app config.
#[cfg(feature = "server")]
pub fn configure(
    repo: InMemoryRecordStore,
    server_config: ServerConfig,
) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .service(search_users);
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = open_record_store(&server_config.dataset_path);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting search server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let routes = configure(repo, server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
