//! State Nicknames Core Library
//!
//! Provides the platform-independent part of the state nickname screen:
//! - Fetching the raw payload (Fetcher, `HttpFetcher`)
//! - Decoding it into records through an explicit field map (`RecordDecoder`)
//! - Owning the list and the loading indicator (`ListPresenter`)
//!
//! The list widget itself lives outside this crate and reads the presenter
//! through the `ListSource` trait.

pub mod decoder;
pub mod error;
pub mod http_client;
pub mod presenter;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use decoder::{FieldMap, RecordDecoder};
pub use error::{CoreResult, DecodeError, ErrorKind, LoadError};
pub use http_client::{HttpFetcher, DEFAULT_ENDPOINT};
pub use presenter::{Completion, ListPresenter};
pub use services::LoaderService;
pub use traits::{Fetcher, ListSource};
pub use types::{LoadPhase, LoadTicket, LoadingIndicator, StateRecord};
