use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use std::path::PathBuf;

mod config;

use config::SiteConfig;

// any path the bundle doesn't have is a client route
async fn spa(index: web::Data<PathBuf>) -> std::io::Result<NamedFile> {
    NamedFile::open(index.get_ref())
}

#[actix_web::main]
async fn main() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err).context("reading .env");
        }
    }
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.assets_dir.display(),
        cfg.addr,
        cfg.port
    );

    let index = web::Data::new(cfg.index_file());
    let (dist_dir, assets_dir) = (cfg.dist_dir.clone(), cfg.assets_dir.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(index.clone())
            .service(Files::new("/assets", assets_dir.clone()))
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
            .default_service(web::get().to(spa))
    })
    .bind((cfg.addr.as_str(), cfg.port))
    .with_context(|| format!("binding {}:{}", cfg.addr, cfg.port))?
    .run()
    .await
    .context("site server stopped")
}
