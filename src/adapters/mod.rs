// Adapters layer: concrete implementations for external systems (prediction http client, in-memory page).

pub mod http;
pub mod page;
