use reqwest::Client;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }
}

/// Collapses a `reqwest` send result into the response body, mapping
/// non-2xx statuses to [`Error::Status`].
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::Status {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_the_body_on_success() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("ok body")
            .create_async()
            .await;

        let response = HttpClient::new().get(server.url()).send().await;
        let body = response.handle().await?;

        mock.assert_async().await;
        assert_eq!(body, "ok body");

        Ok(())
    }

    #[tokio::test]
    async fn should_map_non_success_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(404)
            .with_body("missing")
            .create_async()
            .await;

        let response = HttpClient::new().get(server.url()).send().await;
        let error = response.handle().await.unwrap_err();

        assert!(error.is_not_found());
        assert!(matches!(
            error,
            Error::Status { status: 404, ref message } if message == "missing"
        ));
    }

    #[tokio::test]
    async fn should_accept_empty_no_content_responses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/")
            .with_status(204)
            .create_async()
            .await;

        let response = HttpClient::new().delete(server.url()).send().await;
        let body = response.handle().await.unwrap();

        assert_eq!(body, "");
    }
}
