/// Handler state constructor.
pub mod http_service_data;
