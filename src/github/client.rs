//! GitHub REST client implementing [`ReleaseProvider`]

use super::types::{Asset, AssetUpload, NewRelease, Release, RepositoryRef};
use super::ReleaseProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Body, Client, Response};
use std::sync::OnceLock;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::io::ReaderStream;

/// Public GitHub REST API endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";
/// Public GitHub asset upload endpoint
pub const GITHUB_UPLOADS_URL: &str = "https://uploads.github.com";

const API_VERSION: &str = "2022-11-28";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One-time initialization guard for the rustls crypto provider
static RUSTLS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// GitHub API client authenticated with a personal access token
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    uploads_url: String,
}

impl GitHubClient {
    /// Create a client for github.com
    pub fn new(token: &str) -> Result<Self, ProviderError> {
        Self::with_base_urls(token, GITHUB_API_URL, GITHUB_UPLOADS_URL)
    }

    /// Create a client against custom API and upload endpoints
    pub fn with_base_urls(
        token: &str,
        api_url: impl Into<String>,
        uploads_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        RUSTLS_INITIALIZED.get_or_init(|| {
            if rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
            {
                log::debug!("rustls crypto provider was already installed");
            }
        });

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ProviderError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|source| ProviderError::Http {
                operation: "build HTTP client",
                source,
            })?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            uploads_url: uploads_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn releases_url(&self, repo: &RepositoryRef) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

/// Pass through 2xx responses, turn anything else into [`ProviderError::Status`]
async fn ensure_success(
    operation: &'static str,
    response: Response,
) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        operation,
        status: status.as_u16(),
        message,
    })
}

fn http_error(operation: &'static str) -> impl FnOnce(reqwest::Error) -> ProviderError {
    move |source| ProviderError::Http { operation, source }
}

fn decode_error(operation: &'static str) -> impl FnOnce(reqwest::Error) -> ProviderError {
    move |e| ProviderError::Decode {
        operation,
        reason: e.to_string(),
    }
}

fn io_error(operation: &'static str) -> impl FnOnce(std::io::Error) -> ProviderError {
    move |source| ProviderError::Io { operation, source }
}

#[async_trait]
impl ReleaseProvider for GitHubClient {
    async fn get_latest_release(
        &self,
        repo: &RepositoryRef,
    ) -> Result<Option<Release>, ProviderError> {
        const OP: &str = "get latest release";

        let url = format!("{}/latest", self.releases_url(repo));
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(http_error(OP))?;
        let response = match ensure_success(OP, response).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => {
                log::debug!("{} has no published release", repo);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let release = response
            .json::<Release>()
            .await
            .map_err(decode_error(OP))?;

        Ok(Some(release))
    }

    async fn create_release(
        &self,
        repo: &RepositoryRef,
        release: &NewRelease,
    ) -> Result<Release, ProviderError> {
        const OP: &str = "create release";

        let url = self.releases_url(repo);
        log::debug!("POST {} (tag {})", url, release.tag_name);

        let response = self
            .http
            .post(&url)
            .json(release)
            .send()
            .await
            .map_err(http_error(OP))?;

        ensure_success(OP, response)
            .await?
            .json::<Release>()
            .await
            .map_err(decode_error(OP))
    }

    async fn download_asset(
        &self,
        repo: &RepositoryRef,
        asset_id: u64,
        out: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, ProviderError> {
        const OP: &str = "download asset";

        let url = format!("{}/assets/{}", self.releases_url(repo), asset_id);
        log::debug!("GET {}", url);

        // Asset content is served through a redirect to storage; reqwest follows
        // it and drops the Authorization header when the host changes.
        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, DEFAULT_CONTENT_TYPE)
            .send()
            .await
            .map_err(http_error(OP))?;
        let mut response = ensure_success(OP, response).await?;

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await.map_err(http_error(OP))? {
            out.write_all(&chunk).await.map_err(io_error(OP))?;
            written += chunk.len() as u64;
        }
        out.flush().await.map_err(io_error(OP))?;

        log::debug!("asset {} streamed {} bytes", asset_id, written);
        Ok(written)
    }

    async fn upload_asset(
        &self,
        repo: &RepositoryRef,
        release_id: u64,
        upload: &AssetUpload,
        file: tokio::fs::File,
    ) -> Result<Asset, ProviderError> {
        const OP: &str = "upload asset";

        let len = file.metadata().await.map_err(io_error(OP))?.len();
        let url = format!(
            "{}/repos/{}/{}/releases/{}/assets",
            self.uploads_url, repo.owner, repo.repo, release_id
        );

        let mut query = vec![("name", upload.name.as_str())];
        if let Some(label) = upload.label.as_deref().filter(|l| !l.is_empty()) {
            query.push(("label", label));
        }
        let content_type = upload
            .content_type
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        log::debug!("POST {} ({}, {} bytes)", url, upload.name, len);

        let response = self
            .http
            .post(&url)
            .query(&query)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, len)
            .body(Body::wrap_stream(ReaderStream::new(file)))
            .send()
            .await
            .map_err(http_error(OP))?;

        ensure_success(OP, response)
            .await?
            .json::<Asset>()
            .await
            .map_err(decode_error(OP))
    }
}
