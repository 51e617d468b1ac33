//
//  ibm-continuous-delivery
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to every request sent by a service client.
//!
//! ## Supported Authentication Methods
//!
//! - **Bearer token**: an IAM access token obtained out of band
//!   (for example `ibmcloud iam oauth-tokens`).
//! - **Basic**: username/password, used by some private deployments.
//! - **No auth**: sends requests without an `Authorization` header, useful
//!   against local fakes and test servers.
//!
//! Acquiring or refreshing IAM tokens is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use ibm_continuous_delivery::auth::Authenticator;
//!
//! let auth = Authenticator::bearer("eyJraWQiOi...");
//! assert_eq!(auth.auth_type(), "bearerToken");
//! ```

use reqwest::RequestBuilder;

use crate::api::ApiError;

/// Authentication type name for bearer tokens, as used in configuration.
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearerToken";

/// Authentication type name for HTTP basic auth.
pub const AUTH_TYPE_BASIC: &str = "basic";

/// Authentication type name for unauthenticated requests.
pub const AUTH_TYPE_NO_AUTH: &str = "noAuth";

/// Credentials applied to outgoing requests.
///
/// # Variants
///
/// - `BearerToken`: `Authorization: Bearer <token>`
/// - `Basic`: `Authorization: Basic <base64(username:password)>`
/// - `NoAuth`: no header
#[derive(Debug, Clone, Default)]
pub enum Authenticator {
    /// IAM access token sent as a bearer token.
    BearerToken {
        /// The access token string.
        token: String,
    },
    /// HTTP basic authentication.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
    /// Requests are sent without credentials.
    #[default]
    NoAuth,
}

impl Authenticator {
    /// Creates a bearer token authenticator.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken {
            token: token.into(),
        }
    }

    /// Creates a basic authenticator.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Builds an authenticator from a configured auth type and its values.
    ///
    /// The auth type is matched case-insensitively against
    /// [`AUTH_TYPE_BEARER_TOKEN`], [`AUTH_TYPE_BASIC`] and [`AUTH_TYPE_NO_AUTH`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unknown auth type or when a value the
    /// type needs is missing or empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ibm_continuous_delivery::auth::Authenticator;
    ///
    /// let auth = Authenticator::from_parts("BEARERTOKEN", Some("abc"), None, None).unwrap();
    /// assert!(matches!(auth, Authenticator::BearerToken { .. }));
    ///
    /// assert!(Authenticator::from_parts("basic", None, Some("me"), None).is_err());
    /// ```
    pub fn from_parts(
        auth_type: &str,
        bearer_token: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ApiError> {
        let required = |value: Option<&str>, name: &str| -> Result<String, ApiError> {
            value
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    ApiError::Config(format!("auth type '{}' requires a {}", auth_type, name))
                })
        };

        match auth_type.to_ascii_lowercase().as_str() {
            "bearertoken" => Ok(Self::BearerToken {
                token: required(bearer_token, "bearer token")?,
            }),
            "basic" => Ok(Self::Basic {
                username: required(username, "username")?,
                password: required(password, "password")?,
            }),
            "noauth" => Ok(Self::NoAuth),
            other => Err(ApiError::Config(format!("unsupported auth type '{}'", other))),
        }
    }

    /// The configuration name of this authenticator's type.
    pub fn auth_type(&self) -> &'static str {
        match self {
            Self::BearerToken { .. } => AUTH_TYPE_BEARER_TOKEN,
            Self::Basic { .. } => AUTH_TYPE_BASIC,
            Self::NoAuth => AUTH_TYPE_NO_AUTH,
        }
    }

    /// Adds the authentication header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::BearerToken { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::NoAuth => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_types() {
        assert!(matches!(
            Authenticator::from_parts("basic", None, Some("u"), Some("p")),
            Ok(Authenticator::Basic { .. })
        ));
        assert!(matches!(
            Authenticator::from_parts("noAuth", None, None, None),
            Ok(Authenticator::NoAuth)
        ));
        assert!(matches!(
            Authenticator::from_parts("iam", Some("x"), None, None),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_from_parts_rejects_empty_token() {
        assert!(Authenticator::from_parts("bearerToken", Some(""), None, None).is_err());
    }

    #[test]
    fn test_apply_to_request_sets_header() {
        let client = reqwest::Client::new();
        let request = Authenticator::bearer("tok")
            .apply_to_request(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );

        let request = Authenticator::NoAuth
            .apply_to_request(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
