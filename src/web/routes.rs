use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{get, web, HttpResponse, Responder};

pub const INDEX_FILE: &str = "index.html";

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Serves files from `site_dir`. Unknown paths get `index.html` so the
/// client router can resolve them, which keeps deep links working.
fn site_files(site_dir: PathBuf) -> Files {
    let index = site_dir.join(INDEX_FILE);

    Files::new("/", site_dir)
        .index_file(INDEX_FILE)
        .prefer_utf8(true)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

pub fn configure(site_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(healthz).service(site_files(site_dir));
    }
}
