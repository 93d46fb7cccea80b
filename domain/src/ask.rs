use crate::message_log::HistoryEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::types::Result;

/// Path of the answering service's question endpoint.
pub const ASK_PATH: &str = "/api/ask";

/// Body of `POST /api/ask`. `history` never contains `message` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

/// One round trip to the remote answering service. Implementations make a
/// single attempt and return the decoded JSON payload.
pub trait AskTransport {
    fn ask(&self, request: &AskRequest) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Which extraction step produced the answer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    BareString,
    TextField,
    ResponseField,
    Serialized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

type Extractor = fn(&Value) -> Option<&str>;

const EXTRACTORS: [(AnswerSource, Extractor); 3] = [
    (AnswerSource::BareString, bare_string),
    (AnswerSource::TextField, text_field),
    (AnswerSource::ResponseField, response_field),
];

fn bare_string(payload: &Value) -> Option<&str> {
    payload.as_str()
}

fn text_field(payload: &Value) -> Option<&str> {
    payload.get("text").and_then(Value::as_str)
}

fn response_field(payload: &Value) -> Option<&str> {
    payload.get("response").and_then(Value::as_str)
}

/// Pull displayable text out of any JSON payload. Blank candidates are
/// skipped; when nothing matches the whole payload is serialized, so this
/// never fails.
pub fn extract_answer(payload: &Value) -> Answer {
    for (source, extract) in EXTRACTORS {
        if let Some(text) = extract(payload).filter(|t| !t.trim().is_empty()) {
            return Answer {
                text: text.to_string(),
                source,
            };
        }
    }
    Answer {
        text: payload.to_string(),
        source: AnswerSource::Serialized,
    }
}
