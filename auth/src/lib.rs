//! Authentication primitives shared by the services in this workspace:
//! - Password hashing and verification (Argon2id)
//! - Signed session token generation and validation (HS256 JWT)
//!
//! Each service composes these however its own domain requires; this crate
//! holds no service state and performs no I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::hs256(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("alice", "user", 24);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
