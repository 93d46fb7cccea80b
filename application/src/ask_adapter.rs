use domain::ask::{extract_answer, AnswerSource, AskRequest, AskTransport};
use domain::message_log::HistoryEntry;
use domain::turn::Turn;
use serde_json::Value;
use shared::telemetry::Telemetry;
use tracing::{info, warn};

/// Turns a question plus prior history into exactly one call on the
/// transport, and the outcome of that call into an assistant turn.
pub struct AskAdapter<T> {
    transport: T,
}

impl<T: AskTransport> AskAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Never fails: transport and decode errors become the fixed error reply.
    pub async fn send(&self, utterance: &str, prior_history: Vec<HistoryEntry>) -> Turn {
        let request = AskRequest {
            message: utterance.to_string(),
            history: prior_history,
        };
        let telemetry = Telemetry::new();

        match self.transport.ask(&request).await {
            Ok(Value::Null) => {
                warn!(
                    elapsed_ms = telemetry.elapsed_ms() as u64,
                    "answering service sent null, replying with error notice"
                );
                Turn::error_reply()
            }
            Ok(payload) => {
                let answer = extract_answer(&payload);
                if answer.source == AnswerSource::Serialized {
                    warn!("answer had no text or response field; showing raw payload");
                }
                info!(
                    elapsed_ms = telemetry.elapsed_ms() as u64,
                    source = ?answer.source,
                    history_len = request.history.len(),
                    "answer received"
                );
                Turn::assistant(answer.text)
            }
            Err(e) => {
                warn!(
                    elapsed_ms = telemetry.elapsed_ms() as u64,
                    error = %e,
                    "question failed, replying with error notice"
                );
                Turn::error_reply()
            }
        }
    }
}
