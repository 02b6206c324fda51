// src/backend/rest.rs
use crate::backend::PropertySource;
use crate::config::BackendConfig;
use crate::domain::property::RemoteProperty;
use crate::domain::Property;
use crate::errors::ServerError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const PROPERTIES_PATH: &str = "rest/v1/properties";

/// Client for the hosted database's REST interface.
pub struct RestBackend {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RestBackend {
    pub fn new(cfg: &BackendConfig) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ServerError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }

    fn properties_url(&self) -> Result<Url, ServerError> {
        let mut base = self.base_url.clone();
        // keep any path prefix of the base when joining
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let mut url = base
            .join(PROPERTIES_PATH)
            .map_err(|e| ServerError::Backend(format!("bad backend url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap, ServerError> {
        let bad_key = |_| ServerError::Backend("backend api key is not a valid header value".into());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("apikey", HeaderValue::from_str(&self.api_key).map_err(bad_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(bad_key)?,
        );
        Ok(headers)
    }
}

impl PropertySource for RestBackend {
    fn fetch_properties(&self) -> Result<Vec<Property>, ServerError> {
        let url = self.properties_url()?;
        let start = std::time::Instant::now();

        let resp = self
            .client
            .get(url)
            .headers(self.headers()?)
            .send()
            .map_err(|e| ServerError::Backend(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ServerError::Backend(e.to_string()))?;

        if !status.is_success() {
            return Err(ServerError::Backend(format!("HTTP {status}: {text}")));
        }

        let (fetched, properties) = decode_properties(&text)?;

        info!(
            fetched,
            kept = properties.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched properties from backend"
        );
        Ok(properties)
    }
}

/// Decodes a backend payload row by row. Rows that do not convert are logged
/// and skipped; only a payload that is not a JSON array is an error.
pub(crate) fn decode_properties(text: &str) -> Result<(usize, Vec<Property>), ServerError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(text)
        .map_err(|e| ServerError::Backend(format!("unexpected payload: {e}")))?;

    let fetched = rows.len();
    let properties = rows
        .into_iter()
        .filter_map(|row| {
            let converted = serde_json::from_value::<RemoteProperty>(row)
                .map_err(|e| e.to_string())
                .and_then(RemoteProperty::into_property);
            match converted {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("skipping backend property: {e}");
                    None
                }
            }
        })
        .collect();

    Ok((fetched, properties))
}
