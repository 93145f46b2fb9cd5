//! GitHub REST adapter.
//!
//! Three calls, all blocking with a fixed timeout and no retries:
//! `GET /user`, `POST /user/repos`, `DELETE /repos/{owner}/{name}`.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use sparkstart_core::{
    application::{ApplicationError, ports::RemoteRepository},
    domain::{AccessToken, CloneUrl},
    error::SparkResult,
};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Per-request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("sparkstart/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct User {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Repository {
    clone_url: String,
}

/// [`RemoteRepository`] over the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    /// Client for `api_url` (no trailing slash needed).
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> SparkResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApplicationError::RemoteUnavailable {
                reason: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    fn authorized(&self, request: RequestBuilder, token: &AccessToken) -> RequestBuilder {
        request
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, ACCEPT)
    }

    fn send(&self, request: RequestBuilder) -> SparkResult<Response> {
        let response = request
            .send()
            .map_err(|e| ApplicationError::RemoteUnavailable {
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if status.as_u16() >= 300 {
            let body = response.text().unwrap_or_default();
            debug!(status = status.as_u16(), "GitHub API error");
            return Err(ApplicationError::RemoteApi {
                status: status.as_u16(),
                body: body.trim().to_string(),
            }
            .into());
        }
        Ok(response)
    }

    fn parse<T: serde::de::DeserializeOwned>(response: Response) -> SparkResult<T> {
        let status = response.status().as_u16();
        response.json().map_err(|e| {
            ApplicationError::RemoteApi {
                status,
                body: format!("unexpected response body: {}", e.without_url()),
            }
            .into()
        })
    }
}

impl RemoteRepository for GitHubClient {
    #[instrument(skip_all)]
    fn authenticated_user(&self, token: &AccessToken) -> SparkResult<String> {
        let request = self.authorized(self.client.get(self.url("/user")), token);
        let user: User = Self::parse(self.send(request)?)?;
        debug!(login = %user.login, "Authenticated");
        Ok(user.login)
    }

    #[instrument(skip(self, token))]
    fn create_repository(&self, name: &str, token: &AccessToken) -> SparkResult<CloneUrl> {
        let request = self
            .authorized(self.client.post(self.url("/user/repos")), token)
            .json(&json!({ "name": name, "private": false }));
        let repo: Repository = Self::parse(self.send(request)?)?;
        Ok(CloneUrl::new(repo.clone_url))
    }

    #[instrument(skip(self, token))]
    fn delete_repository(&self, owner: &str, name: &str, token: &AccessToken) -> SparkResult<()> {
        let request = self.authorized(
            self.client.delete(self.url(&format!("/repos/{owner}/{name}"))),
            token,
        );
        self.send(request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkstart_core::error::SparkError;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve exactly one canned response and hand back the raw request.
    fn one_shot(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(end) = text.find("\r\n\r\n") {
                    let expected = text[..end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + expected {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (base, handle)
    }

    fn token() -> AccessToken {
        AccessToken::new("ghp_test").unwrap()
    }

    #[test]
    fn authenticated_user_reads_login() {
        let (base, server) = one_shot("200 OK", r#"{"login":"octocat","id":1}"#);
        let client = GitHubClient::new(base, DEFAULT_TIMEOUT).unwrap();

        assert_eq!(client.authenticated_user(&token()).unwrap(), "octocat");

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /user "));
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("authorization: bearer ghp_test"));
        assert!(lower.contains("accept: application/vnd.github+json"));
    }

    #[test]
    fn create_repository_posts_public_repo() {
        let (base, server) = one_shot(
            "201 Created",
            r#"{"clone_url":"https://github.com/octocat/demo.git"}"#,
        );
        let client = GitHubClient::new(base, DEFAULT_TIMEOUT).unwrap();

        let url = client.create_repository("demo", &token()).unwrap();
        assert_eq!(url.as_str(), "https://github.com/octocat/demo.git");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /user/repos "));
        assert!(request.contains(r#""name":"demo""#));
        assert!(request.contains(r#""private":false"#));
    }

    #[test]
    fn delete_repository_targets_owner_and_name() {
        let (base, server) = one_shot("204 No Content", "");
        let client = GitHubClient::new(base, DEFAULT_TIMEOUT).unwrap();

        client
            .delete_repository("octocat", "demo", &token())
            .unwrap();
        assert!(
            server
                .join()
                .unwrap()
                .starts_with("DELETE /repos/octocat/demo ")
        );
    }

    #[test]
    fn error_status_carries_body() {
        let (base, _server) = one_shot(
            "422 Unprocessable Entity",
            r#"{"message":"name already exists on this account"}"#,
        );
        let client = GitHubClient::new(base, DEFAULT_TIMEOUT).unwrap();

        match client.create_repository("demo", &token()).unwrap_err() {
            SparkError::Application(ApplicationError::RemoteApi { status, body }) => {
                assert_eq!(status, 422);
                assert!(body.contains("already exists"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unreachable_host_is_remote_unavailable() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client =
            GitHubClient::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();

        assert!(matches!(
            client.authenticated_user(&token()),
            Err(SparkError::Application(
                ApplicationError::RemoteUnavailable { .. }
            ))
        ));
    }
}
