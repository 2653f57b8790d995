//! NeuroRead adapter: rewrites text for accessibility profiles via Gemini.
//!
//! Accepts `{text, disability_type, options}` over HTTP, builds a
//! profile-specific instruction prompt, submits it to the hosted
//! generation model, and returns the rewritten text verbatim.

pub mod error;
pub mod prompt;
pub mod server;
pub mod ai {
    pub mod client;
}

pub use error::AdapterError;
pub use server::{build_router, TransformRequest, TransformResponse};
