pub mod currency_service;
pub mod extract_service;
pub mod ingest_service;
pub mod rate_service;
pub mod report_service;
