pub mod client;
pub mod listing_provider;
