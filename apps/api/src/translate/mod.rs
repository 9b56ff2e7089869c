// Translate endpoint: validates the input, prompts the provider once and
// shapes the answer according to the configured response variant.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod variant;

pub use variant::ResponseVariant;
