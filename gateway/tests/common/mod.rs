use std::sync::Arc;

use async_trait::async_trait;
use gateway::domain::authentication::errors::AuthenticatorClientError;
use gateway::domain::authentication::ports::AuthenticatorPort;
use gateway::inbound::http::router::create_router;
use mockall::mock;

// Define mocks in the test crate using mockall
mock! {
    pub Authenticator {}

    #[async_trait]
    impl AuthenticatorPort for Authenticator {
        async fn authenticate_password(
            &self,
            username: &str,
            password: &str,
        ) -> Result<String, AuthenticatorClientError>;
    }
}

/// Test application that spawns a real server over a mocked authenticator
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn(authenticator: MockAuthenticator) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(Arc::new(authenticator));
        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
