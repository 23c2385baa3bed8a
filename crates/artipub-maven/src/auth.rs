//! Request authentication from descriptor credentials.
//!
//! Precedence: access token (bearer), then username/password (basic), then
//! API key (`X-JFrog-Art-Api`). With none of them requests go out anonymous.

use reqwest::RequestBuilder;

/// Header carrying an Artifactory API key.
pub const API_KEY_HEADER: &str = "X-JFrog-Art-Api";

use artipub_core::descriptor::UploadDescriptor;

/// Credentials attached to every probe and upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Anonymous,
    Basic {
        username: String,
        password: String,
    },
    Bearer(String),
    ApiKey(String),
}

impl Credentials {
    pub fn from_descriptor(descriptor: &UploadDescriptor) -> Self {
        if let Some(token) = &descriptor.access_token {
            return Credentials::Bearer(token.clone());
        }
        if !descriptor.username.is_empty() {
            return Credentials::Basic {
                username: descriptor.username.clone(),
                password: descriptor.password.clone(),
            };
        }
        match &descriptor.api_key {
            Some(key) => Credentials::ApiKey(key.clone()),
            None => Credentials::Anonymous,
        }
    }
}

/// Apply authentication to a request if credentials are configured.
pub fn apply_auth(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    match credentials {
        Credentials::Basic { username, password } => {
            request.basic_auth(username, Some(password))
        }
        Credentials::Bearer(token) => request.bearer_auth(token),
        Credentials::ApiKey(key) => request.header(API_KEY_HEADER, key),
        Credentials::Anonymous => request,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use artipub_core::descriptor::TransportOptions;
    use artipub_core::ArtifactCoordinate;

    use super::*;

    fn descriptor(username: &str, token: Option<&str>) -> UploadDescriptor {
        with_api_key(username, token, None)
    }

    fn with_api_key(username: &str, token: Option<&str>, key: Option<&str>) -> UploadDescriptor {
        UploadDescriptor {
            server_url: "http://h".into(),
            username: username.into(),
            password: "pw".into(),
            access_token: token.map(str::to_string),
            api_key: key.map(str::to_string),
            repo_key: None,
            coordinate: ArtifactCoordinate::new("g", "a", "1"),
            files: Vec::new(),
            force_upload: false,
            workspace_root: PathBuf::from("."),
            manifest: None,
            transport: TransportOptions::default(),
        }
    }

    #[test]
    fn empty_username_is_anonymous() {
        assert_eq!(
            Credentials::from_descriptor(&descriptor("", None)),
            Credentials::Anonymous
        );
    }

    #[test]
    fn username_gives_basic() {
        assert_eq!(
            Credentials::from_descriptor(&descriptor("admin", None)),
            Credentials::Basic {
                username: "admin".into(),
                password: "pw".into()
            }
        );
    }

    #[test]
    fn token_wins_over_basic() {
        assert_eq!(
            Credentials::from_descriptor(&descriptor("admin", Some("tok"))),
            Credentials::Bearer("tok".into())
        );
    }

    #[test]
    fn api_key_used_only_without_token_or_username() {
        assert_eq!(
            Credentials::from_descriptor(&with_api_key("", None, Some("AKC"))),
            Credentials::ApiKey("AKC".into())
        );
        assert!(matches!(
            Credentials::from_descriptor(&with_api_key("admin", None, Some("AKC"))),
            Credentials::Basic { .. }
        ));
        assert_eq!(
            Credentials::from_descriptor(&with_api_key("admin", Some("tok"), Some("AKC"))),
            Credentials::Bearer("tok".into())
        );
    }

    #[test]
    fn api_key_header_is_set() {
        let client = reqwest::Client::new();
        let req = apply_auth(client.put("http://h/x"), &Credentials::ApiKey("AKC".into()))
            .build()
            .unwrap();
        assert_eq!(req.headers()[API_KEY_HEADER], "AKC");
        assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn basic_header_is_set() {
        let client = reqwest::Client::new();
        let req = apply_auth(
            client.head("http://h/x"),
            &Credentials::Basic {
                username: "admin".into(),
                password: "admin".into(),
            },
        )
        .build()
        .unwrap();
        assert_eq!(
            req.headers()[reqwest::header::AUTHORIZATION],
            "Basic YWRtaW46YWRtaW4="
        );
    }

    #[test]
    fn anonymous_sends_no_header() {
        let client = reqwest::Client::new();
        let req = apply_auth(client.head("http://h/x"), &Credentials::Anonymous)
            .build()
            .unwrap();
        assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
