//! Fetching and presentation abstraction trait definition

mod fetcher;
mod list_source;

pub use fetcher::Fetcher;
pub use list_source::ListSource;
