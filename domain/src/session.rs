use std::fmt;
use thiserror::Error;

/// Single authoritative state of the assistant panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelState {
    Closed,
    Welcome,
    Informational,
    ChatIdle,
    ChatBusy,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self != PanelState::Closed
    }

    pub fn is_busy(self) -> bool {
        self == PanelState::ChatBusy
    }

    /// States from which a new question may start an exchange.
    pub fn accepts_send(self) -> bool {
        matches!(self, PanelState::Welcome | PanelState::ChatIdle)
    }

    pub fn mode(self) -> Option<DisplayMode> {
        match self {
            PanelState::Closed => None,
            PanelState::Welcome => Some(DisplayMode::Welcome),
            PanelState::Informational => Some(DisplayMode::Informational),
            PanelState::ChatIdle | PanelState::ChatBusy => Some(DisplayMode::Chat),
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelState::Closed => "closed",
            PanelState::Welcome => "open.welcome",
            PanelState::Informational => "open.informational",
            PanelState::ChatIdle => "open.chat.idle",
            PanelState::ChatBusy => "open.chat.busy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Welcome,
    Informational,
    Chat,
}

/// Counter bumped whenever the current session is superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("message is blank")]
    Blank,
    #[error("an answer is still pending")]
    Busy,
    #[error("panel does not accept messages while {0}")]
    NotAccepting(PanelState),
    #[error("no suggestion at position {0}")]
    UnknownSuggestion(usize),
}
