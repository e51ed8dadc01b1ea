pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::authentication;

// Include the generated proto code
pub mod proto {
    pub mod authenticator {
        tonic::include_proto!("authenticator");
    }

    pub mod identity {
        tonic::include_proto!("identity");
    }
}
