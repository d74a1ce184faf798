#![allow(dead_code)]

use std::net::SocketAddr;

use actix_web::{App, HttpServer};
use record_search::configure;
use record_search::domain::record::Record;
use record_search::models::config::ServerConfig;
use record_search::repository::InMemoryRecordStore;

pub const TOKEN: &str = "TestToken";

const FIRST_NAMES: [&str; 7] = ["Boyd", "Hilda", "Brooks", "Beth", "Owen", "Rose", "Glenn"];
const LAST_NAMES: [&str; 5] = ["Wolf", "Mayer", "Aguilar", "Wallace", "Day"];

/// 35 records with ids 0..34 in source order and names that do not sort by id.
pub fn sample_records() -> Vec<Record> {
    (0..35)
        .map(|id: i32| {
            let about = if id % 5 == 0 {
                format!("Enim cillum voluptate {id}")
            } else {
                format!("Sit commodo consectetur {id}")
            };
            Record::new(
                id,
                FIRST_NAMES[id as usize % FIRST_NAMES.len()],
                LAST_NAMES[(34 - id) as usize % LAST_NAMES.len()],
                20 + (id * 7) % 15,
                if id % 2 == 0 { "male" } else { "female" },
                about,
            )
        })
        .collect()
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        access_token: TOKEN.to_string(),
        dataset_path: String::new(),
    }
}

/// Starts the search server on an ephemeral port inside the current Actix system.
pub fn spawn_server(repo: InMemoryRecordStore) -> SocketAddr {
    let routes = configure(repo, server_config());
    let server = HttpServer::new(move || App::new().configure(routes.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}
