use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::config::structs::server_config::ServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;

pub const METRICS_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource(data.metrics_path().to_string()).route(web::get().to(http_service_metrics)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    server_config: &ServerConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>)>
{
    info!("[HTTP] Starting server listener on {} (metrics path {})", addr, data.metrics_path());
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .workers(server_config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_metrics(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let start = Instant::now();
    match data.metrics_cache.get_snapshot().await {
        Ok(snapshot) => {
            debug!("[HTTP] Served {} torrents in {:?}", snapshot.torrents, start.elapsed());
            HttpResponse::Ok().content_type(METRICS_CONTENT_TYPE).body(snapshot.render())
        }
        Err(error) => {
            error!("[HTTP] Failed to collect metrics: {}", error);
            sentry::capture_error(&error);
            HttpResponse::InternalServerError().content_type(METRICS_CONTENT_TYPE).body(format!("An error occurred. {error}"))
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    HttpResponse::NotFound().content_type(METRICS_CONTENT_TYPE).body("Not Found")
}
