//! External API integrations

pub mod archive;
pub mod geocoding;
pub mod sheets;

pub use archive::WeatherArchiveClient;
pub use geocoding::GeocodingClient;
pub use sheets::SheetsClient;
