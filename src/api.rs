// API client module: a small blocking HTTP client that talks to the
// teaching-platform backend. Every endpoint answers with the same JSON
// envelope `{code, msg, data}`, where `code == 200` means the request was
// accepted regardless of the HTTP status line.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Envelope code the backend uses for an accepted request.
const CODE_OK: i64 = 200;

/// Page size requested from the paginated subjects endpoint when the
/// bulk endpoint is unavailable.
const SUBJECTS_PAGE_SIZE: u32 = 100;

/// Blocking API client holding the backend base URL and an optional
/// bearer token for authenticated calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// The backend's uniform response wrapper. `data` is absent on most
/// failures, so it stays optional even for endpoints that always return
/// a payload on success.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Paginated wrapper used by list endpoints: the record list sits under a
/// `records` field next to paging counters we do not read.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub records: Vec<T>,
}

/// Login request payload.
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Deserialize, Debug)]
pub struct TokenData {
    pub token: String,
}

/// A subject record as returned by the backend. Only the id is needed to
/// link generated students; the name is kept for log lines. Any other
/// fields the backend sends are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Subject {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Data shape used to create a student. Field names mirror the backend's
/// camelCase expectations on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub student_no: String,
    pub name: String,
    pub password: String,
    pub subject_id: i64,
    pub grade: String,
    pub contact: String,
}

/// Outcome of one creation call that reached the backend: either accepted,
/// or rejected with the server's message. Transport and parse failures are
/// reported as errors instead.
#[derive(Debug)]
pub enum CreateResult {
    Created,
    Rejected(String),
}

impl ApiClient {
    /// Create an ApiClient for the given backend base URL, e.g.
    /// `http://localhost:8080/api/v1`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Store a bearer token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Helper to build the Authorization header map when a token is set.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.token {
            let val = format!("Bearer {}", t);
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&val).unwrap());
        }
        headers
    }

    /// Perform login and return the issued token. A non-200 envelope code
    /// or a transport failure is an error; callers treat it as fatal.
    pub fn login(&self, req: &LoginRequest) -> Result<String> {
        let url = format!("{}/auth/login", &self.base_url);
        let res = self
            .client
            .post(&url)
            .json(req)
            .send()
            .context("Failed to send login request")?;
        let env: Envelope<TokenData> = res.json().context("Parsing login response json")?;
        if env.code != CODE_OK {
            anyhow::bail!(
                "Login rejected: {}",
                env.msg.unwrap_or_else(|| format!("code {}", env.code))
            );
        }
        let data = env.data.context("Login response carried no data")?;
        Ok(data.token)
    }

    /// Fetch the full subject list. Tries the bulk `/subjects/all` endpoint
    /// first; a 404 there means this backend only exposes the paginated
    /// listing, so fall back to requesting one large page.
    pub fn fetch_subjects(&self) -> Result<Vec<Subject>> {
        let url = format!("{}/subjects/all", &self.base_url);
        let res = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .context("Failed to send subjects request")?;
        if res.status() == StatusCode::NOT_FOUND {
            return self.fetch_subjects_page(1, SUBJECTS_PAGE_SIZE);
        }
        let env: Envelope<Vec<Subject>> = res.json().context("Parsing subjects response json")?;
        if env.code != CODE_OK {
            anyhow::bail!(
                "Subjects fetch rejected: {}",
                env.msg.unwrap_or_else(|| format!("code {}", env.code))
            );
        }
        Ok(env.data.unwrap_or_default())
    }

    /// Fetch one page from the paginated subjects listing and unwrap the
    /// `records` list from the page envelope.
    fn fetch_subjects_page(&self, current: u32, size: u32) -> Result<Vec<Subject>> {
        let url = format!("{}/subjects?current={}&size={}", &self.base_url, current, size);
        let res = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .context("Failed to send paged subjects request")?;
        let env: Envelope<Page<Subject>> =
            res.json().context("Parsing paged subjects response json")?;
        if env.code != CODE_OK {
            anyhow::bail!(
                "Subjects fetch rejected: {}",
                env.msg.unwrap_or_else(|| format!("code {}", env.code))
            );
        }
        Ok(env.data.map(|page| page.records).unwrap_or_default())
    }

    /// Create one student. Returns `Created` or `Rejected` based on the
    /// envelope code; transport or parse failures surface as errors so the
    /// caller can log them separately.
    pub fn create_student(&self, student: &StudentPayload) -> Result<CreateResult> {
        let url = format!("{}/students", &self.base_url);
        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(student)
            .send()
            .context("Failed to send student create request")?;
        let env: Envelope<serde_json::Value> =
            res.json().context("Parsing student create response json")?;
        if env.code == CODE_OK {
            Ok(CreateResult::Created)
        } else {
            Ok(CreateResult::Rejected(
                env.msg.unwrap_or_else(|| format!("code {}", env.code)),
            ))
        }
    }
}
