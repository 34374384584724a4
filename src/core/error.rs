use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    CacheUnreadable,
    CacheInvalidJson,
    CacheInvalidEntry,

    LookupRequestFailed,
    LookupServiceError,
    LookupInvalidResponse,

    InternalIoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CacheUnreadable => "cache.unreadable",
            ErrorCode::CacheInvalidJson => "cache.invalid_json",
            ErrorCode::CacheInvalidEntry => "cache.invalid_entry",

            ErrorCode::LookupRequestFailed => "lookup.request_failed",
            ErrorCode::LookupServiceError => "lookup.service_error",
            ErrorCode::LookupInvalidResponse => "lookup.invalid_response",

            ErrorCode::InternalIoError => "internal.io_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheFileDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryDetails {
    pub index: usize,
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceErrorDetails {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn cache_unreadable(path: impl Into<String>, error: impl Into<String>) -> Self {
        let details = serde_json::to_value(CacheFileDetails {
            path: path.into(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::CacheUnreadable, "Unable to read user cache", details)
            .with_hint("Point usercache at the server's usercache.json file")
    }

    pub fn cache_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = serde_json::to_value(CacheFileDetails {
            path: path.into(),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::CacheInvalidJson,
            "User cache is not valid JSON",
            details,
        )
    }

    pub fn cache_invalid_entry(
        index: usize,
        name: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(CacheEntryDetails {
            index,
            name: name.into(),
            uuid: uuid.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::CacheInvalidEntry,
            "User cache entry has a malformed UUID",
            details,
        )
    }

    pub fn lookup_request_failed(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::LookupRequestFailed,
            "Profile lookup request failed",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn lookup_service_error(status: u16, body: impl Into<String>) -> Self {
        let details = serde_json::to_value(ServiceErrorDetails {
            status,
            body: body.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::LookupServiceError,
            format!("Profile lookup service returned HTTP {}", status),
            details,
        )
    }

    pub fn lookup_invalid_response(problem: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::LookupInvalidResponse,
            "Profile lookup returned an unexpected response",
            serde_json::json!({ "problem": problem.into() }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
