use super::github_client::GITHUB_TOKEN;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self) -> RequestBuilder;
    fn sha_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self) -> RequestBuilder {
        self.bearer_auth(GITHUB_TOKEN.to_string())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "repokeeper")
    }

    // `VERSION.sha` makes the commits endpoint answer with the bare sha
    // instead of the full commit object.
    fn sha_headers(self) -> RequestBuilder {
        self.bearer_auth(GITHUB_TOKEN.to_string())
            .header(ACCEPT, "application/vnd.github.VERSION.sha")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "repokeeper")
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! get_sha {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .sha_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! put {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .put($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
    ($url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .put($url)
            .default_headers()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! patch {
    ($url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .patch($url)
            .default_headers()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! delete {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .delete($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;
    use std::env;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "repokeeper")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(url)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_sha_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/vnd.github.VERSION.sha")
            .with_body("4f2a9c")
            .create_async()
            .await;

        let response = get_sha!(url)?;

        mock.assert_async().await;
        assert_eq!(response, "4f2a9c");

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer token")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = post!(url, expected_body)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn patch_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = r#"{"state":"configured"}"#;
        let mock = server
            .mock("PATCH", "/")
            .match_body(expected_body)
            .with_status(202)
            .with_body("{}")
            .create_async()
            .await;

        let response = patch!(url, expected_body)?;

        mock.assert_async().await;
        assert_eq!(response, "{}");

        Ok(())
    }

    #[tokio::test]
    async fn delete_macro() -> Result<()> {
        env::set_var("GITHUB_TOKEN", "token");
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("DELETE", "/")
            .with_status(204)
            .create_async()
            .await;

        let response = delete!(url)?;

        mock.assert_async().await;
        assert_eq!(response, "");

        Ok(())
    }
}
