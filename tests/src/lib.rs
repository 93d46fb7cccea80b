//! Test doubles shared by the integration tests.

use anyhow::anyhow;
use application::ask_adapter::AskAdapter;
use application::session_controller::SessionController;
use application::suggestion_service::SuggestionService;
use domain::ask::{AskRequest, AskTransport};
use serde_json::Value;
use shared::types::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum StubReply {
    Payload(Value),
    Failure(String),
}

#[derive(Default)]
struct StubState {
    replies: VecDeque<StubReply>,
    requests: Vec<AskRequest>,
}

/// Transport that answers from a script and records every request. The last
/// scripted reply repeats once the script runs out.
#[derive(Clone, Default)]
pub struct StubTransport {
    state: Arc<Mutex<StubState>>,
}

impl StubTransport {
    pub fn always(reply: StubReply) -> Self {
        Self::scripted(vec![reply])
    }

    pub fn scripted(replies: Vec<StubReply>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                replies: replies.into(),
                requests: Vec::new(),
            })),
        }
    }

    pub fn requests(&self) -> Vec<AskRequest> {
        self.state.lock().expect("stub state poisoned").requests.clone()
    }

    pub fn calls(&self) -> usize {
        self.state.lock().expect("stub state poisoned").requests.len()
    }
}

impl AskTransport for StubTransport {
    async fn ask(&self, request: &AskRequest) -> Result<Value> {
        let reply = {
            let mut state = self.state.lock().expect("stub state poisoned");
            state.requests.push(request.clone());
            if state.replies.len() > 1 {
                state.replies.pop_front()
            } else {
                state.replies.front().cloned()
            }
        };
        match reply {
            Some(StubReply::Payload(value)) => Ok(value),
            Some(StubReply::Failure(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("stub has no scripted reply")),
        }
    }
}

/// Controller wired to `transport`; the transport handle stays usable for
/// assertions because clones share state.
pub fn controller_with(transport: &StubTransport) -> SessionController<StubTransport> {
    SessionController::new(
        AskAdapter::new(transport.clone()),
        SuggestionService::default(),
    )
}
