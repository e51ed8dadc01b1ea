pub mod authenticator;

pub use authenticator::GrpcAuthenticatorClient;
