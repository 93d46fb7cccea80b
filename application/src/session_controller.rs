use crate::ask_adapter::AskAdapter;
use crate::suggestion_service::SuggestionService;
use domain::ask::AskTransport;
use domain::message_log::{HistoryEntry, MessageLog};
use domain::session::{DisplayMode, Generation, PanelState, SendRejected};
use domain::turn::Turn;
use shared::utils::normalize_utterance;
use tracing::{debug, info};

/// An accepted question whose answer has not been applied yet.
///
/// Carries the generation it was started under so a reply that outlives its
/// session can be recognised and dropped.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    generation: Generation,
    utterance: String,
    history: Vec<HistoryEntry>,
}

impl PendingExchange {
    pub fn utterance(&self) -> &str {
        &self.utterance
    }

    /// History as it stood before the question was appended.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Applied,
    Discarded,
}

/// Owns the panel lifecycle, the message log and the busy gate.
pub struct SessionController<T> {
    adapter: AskAdapter<T>,
    suggestions: SuggestionService,
    state: PanelState,
    log: MessageLog,
    suggestion_order: Vec<String>,
    generation: Generation,
}

impl<T: AskTransport> SessionController<T> {
    pub fn new(adapter: AskAdapter<T>, suggestions: SuggestionService) -> Self {
        Self {
            adapter,
            suggestions,
            state: PanelState::Closed,
            log: MessageLog::new(),
            suggestion_order: Vec::new(),
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.state.mode()
    }

    pub fn turns(&self) -> &[Turn] {
        self.log.turns()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.log.to_history()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn suggestion_order(&self) -> &[String] {
        &self.suggestion_order
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn adapter(&self) -> &AskAdapter<T> {
        &self.adapter
    }

    /// Start a fresh session. Opening an already open panel counts as a
    /// reopen and discards the current session as well.
    pub fn open(&mut self, direct_to_informational: bool) {
        if self.state.is_open() {
            debug!(from = %self.state, "reopening panel");
        }
        self.reset_session();
        self.suggestion_order = self.suggestions.ordering();
        self.state = if direct_to_informational {
            PanelState::Informational
        } else {
            PanelState::Welcome
        };
        info!(state = %self.state, generation = %self.generation, "panel opened");
    }

    /// Discard the session. An outstanding request keeps running but its
    /// reply will be dropped.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        if self.state.is_busy() {
            debug!(generation = %self.generation, "closing with an answer still pending");
        }
        self.reset_session();
        self.suggestion_order.clear();
        self.state = PanelState::Closed;
        info!("panel closed");
    }

    /// Show or hide the build information. Either direction clears the log,
    /// so coming back to chat starts from the welcome screen.
    pub fn toggle_informational(&mut self) {
        match self.state {
            PanelState::Closed => {}
            PanelState::Informational => {
                self.reset_session();
                self.state = PanelState::Welcome;
                debug!("left informational mode");
            }
            _ => {
                self.reset_session();
                self.state = PanelState::Informational;
                debug!("entered informational mode");
            }
        }
    }

    /// Accept a question: append the user turn and mark the panel busy.
    /// Rejections leave every piece of state untouched.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingExchange, SendRejected> {
        if self.state.is_busy() {
            debug!("send ignored while an answer is pending");
            return Err(SendRejected::Busy);
        }
        if !self.state.accepts_send() {
            return Err(SendRejected::NotAccepting(self.state));
        }
        let utterance = normalize_utterance(text).ok_or(SendRejected::Blank)?;

        let pending = PendingExchange {
            generation: self.generation,
            utterance: utterance.to_string(),
            history: self.log.to_history(),
        };
        self.log.append(Turn::user(utterance));
        self.state = PanelState::ChatBusy;
        debug!(turns = self.log.len(), "question accepted");
        Ok(pending)
    }

    /// Run the single network exchange for `pending`.
    pub async fn exchange(&self, pending: &PendingExchange) -> Turn {
        self.adapter
            .send(&pending.utterance, pending.history.clone())
            .await
    }

    /// Apply the reply for `pending` unless its session has been superseded.
    pub fn complete(&mut self, pending: PendingExchange, reply: Turn) -> ExchangeOutcome {
        if pending.generation != self.generation || !self.state.is_busy() {
            info!(
                reply_generation = %pending.generation,
                current_generation = %self.generation,
                "discarding reply from a superseded session"
            );
            return ExchangeOutcome::Discarded;
        }
        self.log.append(reply);
        self.state = PanelState::ChatIdle;
        ExchangeOutcome::Applied
    }

    /// Ask a question and wait for the answer.
    pub async fn send(&mut self, text: &str) -> Result<(), SendRejected> {
        let pending = self.begin_send(text)?;
        let reply = self.exchange(&pending).await;
        self.complete(pending, reply);
        Ok(())
    }

    /// Resolve the suggestion at `index` of the current ordering. Suggestions
    /// are only offered on the welcome screen.
    pub fn suggestion(&self, index: usize) -> Result<String, SendRejected> {
        if self.state != PanelState::Welcome {
            return Err(SendRejected::NotAccepting(self.state));
        }
        self.suggestion_order
            .get(index)
            .cloned()
            .ok_or(SendRejected::UnknownSuggestion(index))
    }

    pub async fn send_suggestion(&mut self, index: usize) -> Result<(), SendRejected> {
        let text = self.suggestion(index)?;
        self.send(&text).await
    }

    fn reset_session(&mut self) {
        self.log.clear();
        self.generation = self.generation.next();
    }
}
