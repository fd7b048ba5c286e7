//! Where the ratings CSV comes from: a local file or an HTTP(S) URL.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::RatingsConfig;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Failed to fetch CSV: {status} from {url}")]
    Status { status: u16, url: String },
}

/// One-shot provider of the raw CSV document.
#[async_trait]
pub trait RatingsSource: Send + Sync {
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human readable location, for logs and status output.
    fn describe(&self) -> String;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RatingsSource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        debug!(path = %self.path.display(), "Reading ratings file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpSource {
    url: url::Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: url::Url, timeout_seconds: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("Folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl RatingsSource for HttpSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let http_error = |e: reqwest::Error| SourceError::Http {
            url: self.url.to_string(),
            message: e.to_string(),
        };

        debug!(url = %self.url, "Fetching ratings CSV");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        response.text().await.map_err(http_error)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Builds the source named by `ratings.source`: URLs with an http(s) scheme
/// are fetched over the network, anything else is a file path.
pub fn source_from_config(config: &RatingsConfig) -> anyhow::Result<Arc<dyn RatingsSource>> {
    let location = config.source.trim();

    if let Ok(url) = url::Url::parse(location)
        && matches!(url.scheme(), "http" | "https")
    {
        return Ok(Arc::new(HttpSource::new(
            url,
            config.request_timeout_seconds,
        )?));
    }

    Ok(Arc::new(FileSource::new(location)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{LoadState, RatingsCatalog};

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/ratings.csv");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("ratings.csv"));
    }

    #[tokio::test]
    async fn test_reads_file() {
        let path = std::env::temp_dir().join(format!("folio-source-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        let text = FileSource::new(&path).fetch().await.unwrap();
        assert_eq!(text, "a,b\n1,2\n");
        let _ = std::fs::remove_file(path);
    }

    const CSV_BODY: &str = "Const,Your Rating,Date Rated,Title,Original Title,URL,Title Type,IMDb Rating,Runtime (mins),Year,Genres\n\
tt1,9,2024-03-01,Heat,Heat,,Movie,8.3,170,1995,Crime\n";

    /// Serves `router` on an ephemeral local port and returns the CSV URL.
    async fn serve(router: axum::Router) -> url::Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        url::Url::parse(&format!("http://{addr}/ratings.csv")).unwrap()
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve(axum::Router::new()).await;
        let source = HttpSource::new(url.clone(), 5).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
        assert!(err.to_string().contains("404"));

        let catalog = RatingsCatalog::new(Arc::new(source), None, 8);
        let report = catalog.load().await;
        assert_eq!(report.state, LoadState::Failed);

        let status = catalog.status().await;
        assert_eq!(status.state, LoadState::Failed);
        assert!(!status.loading);
        assert_eq!(status.count, 0);
        assert!(status.last_error.unwrap().contains("404"));
        assert!(catalog.spotlight().await.is_none());
    }

    #[tokio::test]
    async fn test_http_fetches_csv_body() {
        let router = axum::Router::new()
            .route("/ratings.csv", axum::routing::get(|| async { CSV_BODY }));
        let url = serve(router).await;
        let source = HttpSource::new(url, 5).unwrap();

        assert_eq!(source.fetch().await.unwrap(), CSV_BODY);

        let catalog = RatingsCatalog::new(Arc::new(source), None, 8);
        let report = catalog.load().await;
        assert_eq!(report.state, LoadState::Ready);
        assert_eq!(report.count, 1);
        assert!(!catalog.is_loading().await);
        assert_eq!(catalog.items().await[0].title, "Heat");
    }

    #[test]
    fn test_source_selection() {
        let mut config = RatingsConfig::default();
        config.source = "https://example.com/ratings.csv".to_string();
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "https://example.com/ratings.csv");

        config.source = "data/ratings.csv".to_string();
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "data/ratings.csv");
    }
}
