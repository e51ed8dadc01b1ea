pub mod claims;
pub mod errors;
pub mod handler;

// Callers configure the handler with this tag; re-exported so they do not
// need their own jsonwebtoken dependency.
pub use jsonwebtoken::Algorithm;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
