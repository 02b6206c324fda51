use crate::backend::RestBackend;
use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::{catalog, dashboard, leads, properties, proposals};
use crate::responses::ResultResp;
use crate::sharing::ShareLinkService;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;
use url::form_urlencoded;

/// Form bodies above this size are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Everything a request handler may touch. Shared by all workers.
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
    pub share_links: ShareLinkService,
    pub backend: Option<RestBackend>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ServerError> {
        let backend = config.backend.as_ref().map(RestBackend::new).transpose()?;

        Ok(AppState {
            db: Database::new(config.database_path.clone()),
            share_links: ShareLinkService::new(config.public_base_url.clone()),
            backend,
            config,
        })
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => dashboard::show(state),

        ("GET", ["properties"]) => properties::index(state, &query),
        ("GET", ["properties", "export"]) => properties::export(state, &query),
        ("POST", ["properties"]) => properties::create(state, &Form::read(req)?),
        ("POST", ["properties", "sync"]) => properties::sync(state),
        ("GET", ["properties", id]) => properties::show(state, id),
        ("POST", ["properties", id, "status"]) => {
            properties::update_status(state, id, &Form::read(req)?)
        }
        ("POST", ["properties", id, "delete"]) => properties::delete(state, id),

        ("GET", ["leads"]) => leads::index(state, &query),
        ("POST", ["leads"]) => leads::create(state, &Form::read(req)?),
        ("POST", ["leads", id, "status"]) => {
            leads::update_status(state, parse_id(id)?, &Form::read(req)?)
        }
        ("POST", ["leads", id, "score"]) => {
            leads::update_score(state, parse_id(id)?, &Form::read(req)?)
        }

        ("GET", ["proposals"]) => proposals::index(state),
        ("POST", ["proposals"]) => proposals::create(state, &Form::read(req)?),
        ("GET", ["proposals", id]) => proposals::show(state, parse_id(id)?),
        ("POST", ["proposals", id, "status"]) => {
            proposals::update_status(state, parse_id(id)?, &Form::read(req)?)
        }

        ("GET", ["catalog", "links"]) => catalog::links(state),
        ("POST", ["catalog", "links"]) => catalog::issue(state, &Form::read(req)?),
        ("POST", ["catalog", "links", id, "revoke"]) => catalog::revoke(state, parse_id(id)?),

        ("GET", ["c", token]) => catalog::public(state, token, &query),
        ("POST", ["c", token, "inquiry"]) => catalog::inquiry(state, token, &Form::read(req)?),

        _ => Err(ServerError::NotFound),
    }
}

/// Numeric path ids; anything else is simply not a route.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

pub fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// Decoded `application/x-www-form-urlencoded` body. Later keys win.
#[derive(Debug, Default)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    pub fn read(req: Request) -> Result<Self, ServerError> {
        let mut body = String::new();
        req.into_body()
            .reader()
            .take(MAX_FORM_BYTES)
            .read_to_string(&mut body)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

        Ok(Self::parse(&body))
    }

    pub fn parse(encoded: &str) -> Self {
        Form {
            fields: form_urlencoded::parse(encoded.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trimmed value, empty when missing.
    pub fn text(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    pub fn required<T>(&self, key: &str) -> Result<T, ServerError>
    where
        T: FromStr,
    {
        let raw = self
            .optional(key)
            .ok_or_else(|| ServerError::BadRequest(format!("{key} is required")))?;
        raw.parse()
            .map_err(|_| ServerError::BadRequest(format!("{key} is not valid: {raw:?}")))
    }

    /// Parsed value, `default` when the field is blank.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ServerError>
    where
        T: FromStr,
    {
        match self.optional(key) {
            Some(_) => self.required(key),
            None => Ok(default),
        }
    }

    pub fn parse_optional<T>(&self, key: &str) -> Result<Option<T>, ServerError>
    where
        T: FromStr,
    {
        match self.optional(key) {
            Some(_) => self.required(key).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_decodes_and_trims() {
        let form = Form::parse("name=+Ana+Souza+&email=ana%40example.com&blank=++&n=3");

        assert_eq!(form.text("name"), "Ana Souza");
        assert_eq!(form.text("email"), "ana@example.com");
        assert_eq!(form.optional("blank"), None);
        assert_eq!(form.optional("missing"), None);
        assert_eq!(form.required::<u32>("n").unwrap(), 3);
    }

    #[test]
    fn form_number_errors_are_bad_requests() {
        let form = Form::parse("price=abc");

        assert!(matches!(form.required::<f64>("price"), Err(ServerError::BadRequest(_))));
        assert!(matches!(form.required::<f64>("other"), Err(ServerError::BadRequest(_))));
        assert_eq!(form.parse_or::<u32>("other", 7).unwrap(), 7);
        assert_eq!(form.parse_optional::<f64>("other").unwrap(), None);
    }

    #[test]
    fn non_numeric_ids_are_not_routes() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ServerError::NotFound)));
    }
}
