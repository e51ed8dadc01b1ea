fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate gRPC code from proto files. The client is used by the
    // integration tests.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["../proto/identity.proto"], &["../proto"])?;

    Ok(())
}
