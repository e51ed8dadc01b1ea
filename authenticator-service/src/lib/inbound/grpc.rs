pub mod grpc_authenticator_server;
pub mod handlers;

pub use grpc_authenticator_server::AuthenticatorGrpcService;
