use reqwest::Client;
use url::Url;

/// Path prefixes the detector serves files under. A bare filename is
/// assumed to live under `uploads/`.
const KNOWN_PREFIXES: &[&str] = &["uploads/", "detections/", "static/"];

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("Invalid detector URL: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("Detector request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Detector responded with status {0}")]
    Unhealthy(u16),
}

/// A response relayed from the detector as-is: status, content type and
/// body all come from upstream.
#[derive(Debug)]
pub struct RelayedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RelayedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of the image proxy's fetch-and-fallback chain.
#[derive(Debug)]
pub enum ImageRelay {
    Fetched {
        content_type: String,
        body: Vec<u8>,
    },
    /// Both attempts failed; send the client to the detector directly.
    Redirect { url: String },
}

/// Result of the health probe.
#[derive(Debug)]
pub enum DetectorHealth {
    /// `/ping` answered; payload included.
    Primary(serde_json::Value),
    /// `/ping` failed but the root endpoint answered.
    Fallback(u16),
}

/// Thin client for the external detection service. Every public method
/// maps to one upstream endpoint; nothing is cached or retried here
/// except the single image-path fallback.
#[derive(Clone)]
pub struct DetectorClient {
    http: Client,
    base: Url,
}

impl DetectorClient {
    pub fn new(base_url: &str) -> Result<Self, DetectorError> {
        // A trailing slash keeps Url::join from eating the last path
        // segment of the base.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Ok(Self {
            http: Client::new(),
            base: Url::parse(&normalized)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> Result<Url, DetectorError> {
        Ok(self.base.join(path)?)
    }

    /// Percent-encode each segment of a detector-relative file path.
    fn encode_path(path: &str) -> String {
        path.split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Relay a GET to the detector, forwarding the query string untouched.
    pub async fn relay_get(&self, path: &str, query: &str) -> Result<RelayedResponse, DetectorError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        let response = self.http.get(url).send().await?;
        Self::relayed(response).await
    }

    /// Relay a POST with a verbatim JSON body.
    pub async fn relay_post(&self, path: &str, body: Vec<u8>) -> Result<RelayedResponse, DetectorError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Self::relayed(response).await
    }

    async fn relayed(response: reqwest::Response) -> Result<RelayedResponse, DetectorError> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();
        Ok(RelayedResponse {
            status,
            content_type,
            body,
        })
    }

    /// Fetch an image by detector-relative path, retrying once with an
    /// `uploads/` prefix before giving up and redirecting the client.
    pub async fn fetch_image(&self, raw_path: &str) -> Result<ImageRelay, DetectorError> {
        let adjusted = adjust_image_path(raw_path);
        let primary_url = self.endpoint(&Self::encode_path(&adjusted))?;

        match self.try_fetch_image(primary_url.clone()).await {
            Some(fetched) => return Ok(fetched),
            None => {
                log::warn!("Image fetch failed for {adjusted}");
            }
        }

        if !adjusted.starts_with("uploads/") {
            let alternate = format!("uploads/{raw_path}");
            let alternate_url = self.endpoint(&Self::encode_path(&alternate))?;
            match self.try_fetch_image(alternate_url).await {
                Some(fetched) => return Ok(fetched),
                None => {
                    log::error!("Alternate image path also failed: {alternate}");
                }
            }
        }

        log::info!("All fetch attempts failed, redirecting to the detector for {adjusted}");
        Ok(ImageRelay::Redirect {
            url: primary_url.to_string(),
        })
    }

    /// One fetch attempt. Transport errors and non-2xx responses are
    /// treated alike: both mean "try the next candidate".
    async fn try_fetch_image(&self, url: Url) -> Option<ImageRelay> {
        let response = self.http.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let body = response.bytes().await.ok()?.to_vec();
        Some(ImageRelay::Fetched { content_type, body })
    }

    /// Probe `/ping`, then the root endpoint if that fails.
    pub async fn check(&self) -> Result<DetectorHealth, DetectorError> {
        let ping = self.endpoint("ping")?;
        if let Ok(response) = self.http.get(ping).send().await {
            if response.status().is_success() {
                let payload = response.json().await?;
                return Ok(DetectorHealth::Primary(payload));
            }
        }

        let root = self.http.get(self.base.clone()).send().await?;
        if root.status().is_success() {
            Ok(DetectorHealth::Fallback(root.status().as_u16()))
        } else {
            Err(DetectorError::Unhealthy(root.status().as_u16()))
        }
    }
}

/// Bare filenames get an `uploads/` prefix; anything already carrying a
/// known prefix or any directory component is left alone.
pub fn adjust_image_path(path: &str) -> String {
    let has_known_prefix = KNOWN_PREFIXES.iter().any(|prefix| path.starts_with(prefix));
    if !has_known_prefix && !path.contains('/') {
        format!("uploads/{path}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_filename_is_prefixed_with_uploads() {
        assert_eq!(adjust_image_path("det_1.jpg"), "uploads/det_1.jpg");
    }

    #[test]
    fn known_prefixes_are_left_alone() {
        assert_eq!(adjust_image_path("uploads/det_1.jpg"), "uploads/det_1.jpg");
        assert_eq!(
            adjust_image_path("detections/det_1.jpg"),
            "detections/det_1.jpg"
        );
        assert_eq!(adjust_image_path("static/logo.png"), "static/logo.png");
    }

    #[test]
    fn nested_paths_are_left_alone() {
        assert_eq!(
            adjust_image_path("archive/2026/det_1.jpg"),
            "archive/2026/det_1.jpg"
        );
    }

    #[test]
    fn client_normalizes_the_base_url() {
        let client = DetectorClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        let client = DetectorClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn image_paths_are_percent_encoded_per_segment() {
        assert_eq!(
            DetectorClient::encode_path("uploads/detection 1.jpg"),
            "uploads/detection%201.jpg"
        );
    }
}
