//! Outbound submission to the external form endpoint

mod client;
mod error;
mod traits;

pub use client::{FormPostClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::SubmitTransport;

#[cfg(test)]
pub use traits::MockSubmitTransport;
