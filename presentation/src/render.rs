use colored::Colorize;
use domain::build_info::BUILD_INFO;
use domain::session::DisplayMode;
use domain::turn::{Author, Turn};

pub const WELCOME_HEADING: &str = "What would you like to know?";
pub const WELCOME_BLURB: &str =
    "Ask specific questions about Bart's experience, skills, or fit for your role. \
     Get honest, detailed answers.";
pub const THINKING: &str = "Thinking...";

/// Snapshot of what the panel needs to draw.
pub struct PanelView<'a> {
    pub mode: Option<DisplayMode>,
    pub turns: &'a [Turn],
    pub busy: bool,
    pub suggestions: &'a [String],
}

pub fn render_view(view: &PanelView<'_>) -> String {
    match view.mode {
        None => "Panel closed. Type /open to start a conversation.".dimmed().to_string(),
        Some(DisplayMode::Informational) => render_build_info(),
        Some(DisplayMode::Welcome) => render_welcome(view.suggestions),
        Some(DisplayMode::Chat) => {
            let mut out: Vec<String> = view.turns.iter().map(render_turn).collect();
            if view.busy {
                out.push(render_thinking());
            }
            out.join("\n")
        }
    }
}

pub fn render_welcome(suggestions: &[String]) -> String {
    let mut out = vec![
        WELCOME_HEADING.bold().to_string(),
        WELCOME_BLURB.to_string(),
        String::new(),
    ];
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push(format!("  {} \"{}\"", format!("[{}]", i + 1).blue(), suggestion));
    }
    out.join("\n")
}

pub fn render_build_info() -> String {
    let mut out = vec![BUILD_INFO.heading.bold().to_string()];
    for section in BUILD_INFO.sections {
        out.push(String::new());
        out.push(section.title.green().bold().to_string());
        out.push(section.body.to_string());
    }
    out.join("\n")
}

pub fn render_turn(turn: &Turn) -> String {
    match turn.author {
        Author::User => format!("{} {}", "You:".cyan().bold(), turn.text),
        Author::Assistant => format!("{} {}", "AI:".green().bold(), turn.text),
    }
}

pub fn render_thinking() -> String {
    THINKING.yellow().italic().to_string()
}
