pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::authentication;

// Include the generated proto code
pub mod proto {
    tonic::include_proto!("authenticator");
}
