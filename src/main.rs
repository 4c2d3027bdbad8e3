use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};

use portal::config::ServerConfig;
use portal::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config.map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!(
        "serving {} on http://{}",
        config.site_dir.display(),
        config.bind_addr
    );

    let site_dir = config.site_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(web::security_headers())
            .configure(web::configure(site_dir.clone()))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
