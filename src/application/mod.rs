// Application layer - Use cases over the domain
pub mod reading_source;
pub mod report_service;
pub mod statistics_service;
