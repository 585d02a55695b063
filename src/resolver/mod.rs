// Resolver module - channel identifier → live video ID
//
// Pipeline pieces:
// - extract: classifies raw input into a typed candidate (pure, no I/O)
// - strategies: ordered fallback chain resolving a candidate to a channel ID
// - api: thin YouTube Data API v3 client
// - cache: positive-result TTL cache around the whole resolution
// - orchestrator: ties the pieces together per request

mod api;
mod cache;
mod errors;
mod extract;
mod models;
mod orchestrator;
mod strategies;

pub use api::YouTubeApi;
pub use cache::LiveCache;
pub use errors::ApiError;
pub use extract::extract;
pub use models::{Candidate, LiveLookupResponse};
pub use orchestrator::LiveResolver;
pub use strategies::{default_chain, ResolveStrategy};
