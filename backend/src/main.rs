mod db;
mod error;
mod identity;
mod job_controller;
mod services;

use crate::job_controller::state::JobsState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let host = "127.0.0.1";
    let port = 8080;

    // Create the history schema up front so the first save cannot race it.
    {
        let conn = db::open().map_err(|e| std::io::Error::other(e.to_string()))?;
        db::init_schema(&conn).map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    // Initialize job controller state
    let (tx, rx) = mpsc::channel(100);
    let jobs_state = JobsState {
        jobs: Arc::new(RwLock::new(HashMap::new())),
        tx,
    };

    // Start job updater task
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB, bulk blobs
            .app_data(web::Data::new(jobs_state.clone()))
            .service(services::payloads::configure_routes())
            .service(services::bulk::configure_routes())
    })
        .bind((host, port))?
        .run()
        .await
}
