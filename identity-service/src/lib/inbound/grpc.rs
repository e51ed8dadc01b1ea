pub mod grpc_identity_server;
pub mod handlers;

pub use grpc_identity_server::IdentityGrpcService;
