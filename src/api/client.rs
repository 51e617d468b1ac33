//
//  ibm-continuous-delivery
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Executor
//!
//! This module provides the HTTP layer shared by the Tekton Pipeline and
//! Toolchain service clients. A service method describes a request with a
//! [`RequestDescriptor`] and hands it to [`BaseService`], which sends it and
//! decodes the response into a [`DetailedResponse`].
//!
//! ## Features
//!
//! - Path segments are percent-encoded individually
//! - Optional query parameters are skipped when unset
//! - JSON and JSON merge-patch bodies
//! - Authentication header injection
//! - Status code to [`ApiError`] mapping using the IBM Cloud error body

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::ApiError;
use crate::auth::Authenticator;

/// Content type for JSON request bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type for JSON merge-patch request bodies.
pub const CONTENT_TYPE_MERGE_PATCH: &str = "application/merge-patch+json";

/// A decoded response together with its HTTP status and headers.
///
/// # Type Parameters
///
/// * `T` - The decoded body type (`()` for operations without a body)
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded body.
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Discards status and headers, keeping the decoded body.
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Everything needed to send one request, relative to a service URL.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::client::RequestDescriptor;
///
/// let request = RequestDescriptor::get(["tekton_pipelines", "abc", "pipeline_runs"])
///     .query("limit", 10)
///     .query_opt("status", None::<&str>);
/// assert_eq!(request.segments(), ["tekton_pipelines", "abc", "pipeline_runs"]);
/// assert_eq!(request.query_pairs(), [("limit".to_string(), "10".to_string())]);
/// ```
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    content_type: &'static str,
}

impl RequestDescriptor {
    /// Creates a descriptor for `method` on the given path segments.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method,
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            query: Vec::new(),
            body: None,
            content_type: CONTENT_TYPE_JSON,
        }
    }

    /// A `GET` request.
    pub fn get<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::GET, segments)
    }

    /// A `POST` request.
    pub fn post<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::POST, segments)
    }

    /// A `PUT` request.
    pub fn put<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::PUT, segments)
    }

    /// A `PATCH` request.
    pub fn patch<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::PATCH, segments)
    }

    /// A `DELETE` request.
    pub fn delete<I: IntoIterator<Item = S>, S: AsRef<str>>(segments: I) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is `Some`.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body)?);
        self.content_type = CONTENT_TYPE_JSON;
        Ok(self)
    }

    /// Sets a JSON merge-patch body.
    pub fn merge_patch<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body)?);
        self.content_type = CONTENT_TYPE_MERGE_PATCH;
        Ok(self)
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The unencoded path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

/// Rejects empty values for required path parameters.
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] naming the parameter.
pub fn require_non_empty(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!(
            "{} must be provided and non-empty",
            name
        )));
    }
    Ok(())
}

/// The request executor shared by all service clients.
///
/// Holds the HTTP client, the service URL, the authenticator and any default
/// headers. Cloning is cheap; clones share the connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use ibm_continuous_delivery::api::client::BaseService;
/// use ibm_continuous_delivery::auth::Authenticator;
///
/// let service = BaseService::new(
///     "https://api.us-south.devops.cloud.ibm.com/toolchain/v2",
///     Authenticator::bearer("token"),
/// )?;
/// assert_eq!(service.service_url(), "https://api.us-south.devops.cloud.ibm.com/toolchain/v2");
/// # Ok::<(), ibm_continuous_delivery::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BaseService {
    http: Client,
    service_url: String,
    authenticator: Authenticator,
    default_headers: HeaderMap,
}

impl BaseService {
    /// Creates a request executor for `service_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the URL is empty or not absolute, and
    /// [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(service_url: &str, authenticator: Authenticator) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("ibm-continuous-delivery/{}", crate::VERSION))
            .build()?;

        Ok(Self {
            http,
            service_url: validate_service_url(service_url)?,
            authenticator,
            default_headers: HeaderMap::new(),
        })
    }

    /// Replaces the service URL.
    pub fn set_service_url(&mut self, service_url: &str) -> Result<(), ApiError> {
        self.service_url = validate_service_url(service_url)?;
        Ok(())
    }

    /// The service URL, without a trailing slash.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The authenticator applied to each request.
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for an invalid header name or value.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::InvalidArgument(format!("header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::InvalidArgument(format!("header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Resolves a descriptor to a full URL.
    pub fn build_url(&self, descriptor: &RequestDescriptor) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.service_url)
            .map_err(|e| ApiError::Config(format!("invalid service URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::Config("service URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(&descriptor.segments);

        if !descriptor.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&descriptor.query);
        }

        Ok(url)
    }

    /// Sends a request and decodes the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be decoded into `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<DetailedResponse<T>, ApiError> {
        let (status, headers, body) = self.send(descriptor).await?;
        let result = serde_json::from_slice(&body)?;
        Ok(DetailedResponse {
            status,
            headers,
            result,
        })
    }

    /// Sends a request whose response has no meaningful body.
    pub async fn request_empty(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<DetailedResponse<()>, ApiError> {
        let (status, headers, _) = self.send(descriptor).await?;
        Ok(DetailedResponse {
            status,
            headers,
            result: (),
        })
    }

    async fn send(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<(u16, HeaderMap, Vec<u8>), ApiError> {
        let url = self.build_url(&descriptor)?;
        tracing::debug!(method = %descriptor.method, url = %url, "sending request");

        let mut request = self
            .http
            .request(descriptor.method.clone(), url.clone())
            .headers(self.default_headers.clone())
            .header(ACCEPT, CONTENT_TYPE_JSON);

        if let Some(body) = descriptor.body {
            request = request.header(CONTENT_TYPE, descriptor.content_type).body(body);
        }

        request = self.authenticator.apply_to_request(request);

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %url, "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }

        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok((status.as_u16(), headers, body))
    }
}

fn validate_service_url(service_url: &str) -> Result<String, ApiError> {
    let trimmed = service_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::Config("service URL must not be empty".to_string()));
    }
    Url::parse(trimmed)
        .map_err(|e| ApiError::Config(format!("invalid service URL '{}': {}", trimmed, e)))?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_build_url_encodes_segments_and_query() {
        let service =
            BaseService::new("https://api.example.com/pipeline/v2/", Authenticator::NoAuth)
                .unwrap();
        let descriptor = RequestDescriptor::get(["tekton_pipelines", "a b/c", "properties"])
            .query("name", "x&y")
            .query_opt("sort", None::<String>);

        let url = service.build_url(&descriptor).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/pipeline/v2/tekton_pipelines/a%20b%2Fc/properties?name=x%26y"
        );
    }

    #[test]
    fn test_service_url_validation() {
        assert!(matches!(
            BaseService::new("  ", Authenticator::NoAuth),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            BaseService::new("not a url", Authenticator::NoAuth),
            Err(ApiError::Config(_))
        ));

        let mut service = BaseService::new("https://a.example.com/", Authenticator::NoAuth).unwrap();
        assert_eq!(service.service_url(), "https://a.example.com");
        service.set_service_url("https://b.example.com/v2").unwrap();
        assert_eq!(service.service_url(), "https://b.example.com/v2");
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("pipeline_id", "abc").is_ok());
        assert!(matches!(
            require_non_empty("pipeline_id", " "),
            Err(ApiError::InvalidArgument(ref m)) if m.contains("pipeline_id")
        ));
    }

    #[tokio::test]
    async fn test_request_sends_auth_body_and_decodes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/things/t1")
            .match_header("authorization", "Bearer secret")
            .match_header("content-type", CONTENT_TYPE_MERGE_PATCH)
            .match_header("accept", CONTENT_TYPE_JSON)
            .match_header("x-trace", "abc")
            .match_body(Matcher::Json(json!({"name": "renamed"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"t1","name":"renamed"}"#)
            .create_async()
            .await;

        let service = BaseService::new(&server.url(), Authenticator::bearer("secret"))
            .unwrap()
            .with_default_header("X-Trace", "abc")
            .unwrap();
        let descriptor = RequestDescriptor::patch(["things", "t1"])
            .merge_patch(&json!({"name": "renamed"}))
            .unwrap();

        let response: DetailedResponse<serde_json::Value> =
            service.request(descriptor).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.result["name"], "renamed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_maps_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/things/missing")
            .with_status(404)
            .with_body(r#"{"errors":[{"code":"not_found","message":"Thing not found"}],"trace":"t"}"#)
            .create_async()
            .await;

        let service = BaseService::new(&server.url(), Authenticator::NoAuth).unwrap();
        let err = service
            .request::<serde_json::Value>(RequestDescriptor::get(["things", "missing"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Thing not found"));
    }

    #[tokio::test]
    async fn test_request_empty_and_decode_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/things/t1")
            .with_status(204)
            .create_async()
            .await;
        server
            .mock("GET", "/things/t1")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let service = BaseService::new(&server.url(), Authenticator::NoAuth).unwrap();
        let deleted = service
            .request_empty(RequestDescriptor::delete(["things", "t1"]))
            .await
            .unwrap();
        assert_eq!(deleted.status, 204);

        let err = service
            .request::<serde_json::Value>(RequestDescriptor::get(["things", "t1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
