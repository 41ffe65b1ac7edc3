//! RSVP form model and HTTP client.
//!
//! The backend is external. This module validates what the guest typed,
//! posts it to `{backend}/api/rsvp`, and turns every outcome into the toast
//! the form shows.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const COMMENT_MAX_CHARS: usize = 500;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from validating or submitting an RSVP.
#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Por favor ingresa tu nombre")]
    MissingName,

    #[error("El nombre debe tener al menos 2 caracteres")]
    NameTooShort,

    #[error("El nombre debe tener menos de 100 caracteres")]
    NameTooLong,

    #[error("Por favor déjanos saber si vas a asistir")]
    MissingAttendance,

    #[error("El comentario debe tener menos de 500 caracteres")]
    CommentTooLong,

    /// The backend answered with an error status
    #[error("RSVP rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The answer could not be understood
    #[error("Unexpected response: {0}")]
    Unexpected(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RsvpError {
    /// Caught before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RsvpError::MissingName
                | RsvpError::NameTooShort
                | RsvpError::NameTooLong
                | RsvpError::MissingAttendance
                | RsvpError::CommentTooLong
        )
    }

    pub fn toast_title(&self) -> String {
        match self {
            RsvpError::Rejected { .. } => "Error en el Envío".to_string(),
            RsvpError::Connection(_) => "Error de Conexión".to_string(),
            RsvpError::Unexpected(_) | RsvpError::InvalidUrl(_) => "Error".to_string(),
            validation => validation.to_string(),
        }
    }

    pub fn toast_description(&self) -> Option<String> {
        match self {
            RsvpError::Rejected { message, .. } => Some(message.clone()),
            RsvpError::Connection(_) => Some(
                "Por favor revisa tu conexión a internet e intenta nuevamente.".to_string(),
            ),
            RsvpError::Unexpected(_) | RsvpError::InvalidUrl(_) => Some(
                "Ocurrió un error inesperado. Por favor intenta nuevamente.".to_string(),
            ),
            _ => None,
        }
    }
}

/// What the guest has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpDraft {
    pub name: String,
    /// `None` until one of the two buttons is chosen
    pub attending: Option<bool>,
    pub comment: String,
}

impl RsvpDraft {
    /// Check the draft and build the request body.
    ///
    /// Name and comment are trimmed; an empty comment is sent as `null`.
    pub fn validate(&self) -> Result<RsvpRequest, RsvpError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RsvpError::MissingName);
        }
        let name_len = name.chars().count();
        if name_len < NAME_MIN_CHARS {
            return Err(RsvpError::NameTooShort);
        }
        if name_len > NAME_MAX_CHARS {
            return Err(RsvpError::NameTooLong);
        }

        let attending = self.attending.ok_or(RsvpError::MissingAttendance)?;

        let comment = self.comment.trim();
        if comment.chars().count() > COMMENT_MAX_CHARS {
            return Err(RsvpError::CommentTooLong);
        }

        Ok(RsvpRequest {
            name: name.to_string(),
            attending,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Body of `POST /api/rsvp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRequest {
    pub name: String,
    pub attending: bool,
    pub comment: Option<String>,
}

/// Successful answer to `POST /api/rsvp`.
///
/// A repeat RSVP under the same name updates the earlier one; the backend
/// then omits `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpReceipt {
    pub message: String,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub attending: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RsvpReceipt {
    pub fn is_update(&self) -> bool {
        self.id.is_none()
    }

    pub fn toast_title(&self) -> &'static str {
        "¡Confirmación Enviada!"
    }

    pub fn toast_description(&self) -> String {
        format!("¡Gracias {}! Hemos recibido tu respuesta.", self.name)
    }
}

/// Answer to `GET /api/rsvp/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpStats {
    pub total: u64,
    pub attending: u64,
    pub not_attending: u64,
    #[serde(default)]
    pub response_rate: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "detail")]
    error: String,
}

/// Client for the RSVP backend.
#[derive(Debug, Clone)]
pub struct RsvpClient {
    http: reqwest::Client,
    base: Url,
}

impl RsvpClient {
    /// Create a client for the backend at `backend_url` (without `/api`).
    pub fn new(backend_url: &str) -> Result<Self, RsvpError> {
        let mut base = Url::parse(backend_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RsvpError::Connection)?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, RsvpError> {
        Ok(self.base.join(path)?)
    }

    /// Submit an RSVP.
    pub async fn submit(&self, request: &RsvpRequest) -> Result<RsvpReceipt, RsvpError> {
        let url = self.endpoint("api/rsvp")?;
        debug!(%url, name = %request.name, attending = request.attending, "Submitting RSVP");

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "RSVP request failed");
                RsvpError::Connection(e)
            })?;

        let receipt: RsvpReceipt = read_json(response).await?;
        info!(
            name = %receipt.name,
            attending = receipt.attending,
            updated = receipt.is_update(),
            "RSVP accepted"
        );
        Ok(receipt)
    }

    /// Fetch attendance totals.
    pub async fn stats(&self) -> Result<RsvpStats, RsvpError> {
        let url = self.endpoint("api/rsvp/stats")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(RsvpError::Connection)?;
        read_json(response).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RsvpError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RsvpError::Unexpected(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "Error al enviar confirmación".to_string());
        warn!(status = status.as_u16(), %message, "RSVP backend returned an error");
        return Err(RsvpError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| RsvpError::Unexpected(e.to_string()))
}
