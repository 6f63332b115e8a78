/// State shared by all workers of the scrape server.
pub mod http_service_data;
