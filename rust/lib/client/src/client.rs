use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ApiError, TokenSource};

/// Authenticated JSON client for the VaultX backend.
///
/// Paths are joined onto `base_url` verbatim (`/employee/all`, ...).
/// Cheap to clone; clones share the connection pool and token source.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token, if the source has one.
    async fn authed(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> {
        match self.token_source.token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    async fn send(&self, method: reqwest::Method, path: &str, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let req = self.authed(builder).await?;
        let resp = req.send().await?;
        debug!(%method, path, status = resp.status().as_u16(), "api response");
        Ok(resp)
    }

    /// Map a non-2xx response to `ApiError::Server`, reading its body for a message.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_body(status.as_u16(), &body))
    }

    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        let resp = Self::check(resp).await?;
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// GET a JSON document.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let builder = self.http.get(self.url(path));
        let resp = self.send(reqwest::Method::GET, path, builder).await?;
        Self::parse(resp).await
    }

    /// GET a JSON document where 404 means "absent", not failure.
    pub async fn get_optional<R: DeserializeOwned>(&self, path: &str) -> Result<Option<R>, ApiError> {
        match self.get_json::<Option<R>>(path).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// POST a JSON body; the response body is not read.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.http.post(self.url(path)).json(body);
        let resp = self.send(reqwest::Method::POST, path, builder).await?;
        Self::check(resp).await.map(|_| ())
    }

    /// PATCH a JSON body; the response body is not read.
    pub async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.http.patch(self.url(path)).json(body);
        let resp = self.send(reqwest::Method::PATCH, path, builder).await?;
        Self::check(resp).await.map(|_| ())
    }

    /// PATCH without a body.
    pub async fn patch(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.http.patch(self.url(path));
        let resp = self.send(reqwest::Method::PATCH, path, builder).await?;
        Self::check(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoAuth, StaticToken};
    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Society {
        society_id: String,
        name: String,
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(server.base_url(), Arc::new(StaticToken::new("admin-jwt")))
    }

    // ========================================================================
    // GET
    // ========================================================================

    #[tokio::test]
    async fn get_json_sends_bearer_and_parses() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/society/latest")
                    .header("authorization", "Bearer admin-jwt");
                then.status(200)
                    .json_body(json!({"societyId": "s1", "name": "Green Meadows"}));
            })
            .await;

        let society: Society = client(&server).get_json("/society/latest").await.unwrap();
        assert_eq!(society.society_id, "s1");
        assert_eq!(society.name, "Green Meadows");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn no_auth_omits_authorization_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/guest/all").header_missing("authorization");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = ApiClient::new(server.base_url(), Arc::new(NoAuth));
        let guests: Vec<serde_json::Value> = client.get_json("guest/all").await.unwrap();
        assert!(guests.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_json_non_2xx_is_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/employee/all");
                then.status(500).body("boom");
            })
            .await;

        let err = client(&server)
            .get_json::<Vec<serde_json::Value>>("/employee/all")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, message: None }));
    }

    #[tokio::test]
    async fn get_json_bad_shape_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/society/latest");
                then.status(200).json_body(json!({"unexpected": true}));
            })
            .await;

        let err = client(&server).get_json::<Society>("/society/latest").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn get_optional_maps_404_to_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/society/latest");
                then.status(404).json_body(json!({"message": "No society found"}));
            })
            .await;

        let society: Option<Society> = client(&server).get_optional("/society/latest").await.unwrap();
        assert!(society.is_none());
    }

    #[tokio::test]
    async fn get_optional_other_errors_propagate() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/society/latest");
                then.status(403).json_body(json!({"message": "Forbidden"}));
            })
            .await;

        let err = client(&server)
            .get_optional::<Society>("/society/latest")
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Failed to fetch society"), "Forbidden");
    }

    // ========================================================================
    // Writes
    // ========================================================================

    #[tokio::test]
    async fn post_json_sends_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/society/add")
                    .json_body(json!({"name": "Green Meadows", "address": "Chak Shahzad"}));
                then.status(201).json_body(json!({"societyId": "s1"}));
            })
            .await;

        client(&server)
            .post_json("/society/add", &json!({"name": "Green Meadows", "address": "Chak Shahzad"}))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn post_json_error_carries_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/employee/create");
                then.status(400).json_body(json!({"message": "Email already registered"}));
            })
            .await;

        let err = client(&server)
            .post_json("/employee/create", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Failed to create employee"), "Email already registered");
    }

    #[tokio::test]
    async fn patch_without_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/admin/approve/r1");
                then.status(200);
            })
            .await;

        client(&server).patch("/admin/approve/r1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn network_failure_is_network_error() {
        let client = ApiClient::new("http://127.0.0.1:9", Arc::new(NoAuth));
        let err = client.get_json::<serde_json::Value>("/guest/all").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn url_joining_tolerates_slashes() {
        let client = ApiClient::new("http://api.local/", Arc::new(NoAuth));
        assert_eq!(client.base_url(), "http://api.local");
        assert_eq!(client.url("/employee/all"), "http://api.local/employee/all");
        assert_eq!(client.url("employee/all"), "http://api.local/employee/all");
    }
}
