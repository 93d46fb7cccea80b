use crate::render::{render_thinking, render_turn, render_view, PanelView};
use application::ask_adapter::AskAdapter;
use application::session_controller::SessionController;
use application::suggestion_service::SuggestionService;
use clap::{Parser, Subcommand};
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{theme::ColorfulTheme, Input};
use domain::session::{DisplayMode, SendRejected};
use infrastructure::ask_client::AskClient;
use infrastructure::config::Config;
use shared::types::Result;
use std::io;
use tracing::debug;

const HELP: &str = "\
Commands:
  <text>        ask a question
  /<n>          ask suggestion number n (welcome screen only)
  /info         show or hide how this assistant was built
  /close        close the panel
  /open         open a fresh panel (/open info to start on build info)
  /help         show this help
  /quit         leave";

#[derive(Parser)]
#[command(name = "askpanel")]
#[command(about = "Ask the portfolio assistant about Bart's experience")]
pub struct Cli {
    /// Open straight to the "how was this built" page
    #[arg(long)]
    pub info: bool,

    /// Base URL of the answering service (overrides ASK_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Ask a single question, print the answer and exit
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    Send(String),
    /// Zero-based position in the displayed suggestion list.
    Suggestion(usize),
    ToggleInfo,
    Open { informational: bool },
    Close,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> PanelCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return PanelCommand::Send(line.to_string());
    };
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some("quit" | "exit"), None) => PanelCommand::Quit,
        (Some("close"), None) => PanelCommand::Close,
        (Some("open"), None) => PanelCommand::Open { informational: false },
        (Some("open"), Some("info")) => PanelCommand::Open { informational: true },
        (Some("info"), None) => PanelCommand::ToggleInfo,
        (Some("help"), None) => PanelCommand::Help,
        (Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => PanelCommand::Suggestion(n - 1),
            _ => PanelCommand::Unknown(trimmed.to_string()),
        },
        _ => PanelCommand::Unknown(trimmed.to_string()),
    }
}

pub struct PanelApp {
    controller: SessionController<AskClient>,
}

impl PanelApp {
    pub fn new(config: &Config) -> Result<Self> {
        let client = AskClient::new(config)?;
        debug!(url = client.url(), "answering service configured");
        Ok(Self {
            controller: SessionController::new(
                AskAdapter::new(client),
                SuggestionService::default(),
            ),
        })
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        match cli.command {
            Some(Commands::Ask { question }) => self.handle_one_shot(&question.join(" ")).await,
            None => {
                self.open(cli.info)?;
                self.handle_panel().await
            }
        }
    }

    async fn handle_one_shot(&mut self, question: &str) -> Result<()> {
        self.controller.open(false);
        match self.controller.send(question).await {
            Ok(()) => {
                if let Some(turn) = self.controller.turns().last() {
                    println!("{}", turn.text);
                }
            }
            Err(rejected) => println!("{}", rejected.to_string().yellow()),
        }
        self.controller.close();
        Ok(())
    }

    async fn handle_panel(&mut self) -> Result<()> {
        println!("{}", "Type /help for commands.".dimmed());
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(self.prompt())
                .allow_empty(true)
                .interact_text()?;

            match parse_command(&input) {
                PanelCommand::Quit => break,
                PanelCommand::Help => println!("{}", HELP),
                PanelCommand::Close => {
                    self.controller.close();
                    self.draw();
                }
                PanelCommand::Open { informational } => self.open(informational)?,
                PanelCommand::ToggleInfo => {
                    self.controller.toggle_informational();
                    clear_screen()?;
                    self.draw();
                }
                PanelCommand::Suggestion(index) => match self.controller.suggestion(index) {
                    Ok(text) => self.ask(&text, true).await,
                    Err(rejected) => println!("{}", rejected.to_string().yellow()),
                },
                PanelCommand::Send(text) => self.ask(&text, false).await,
                PanelCommand::Unknown(command) => println!(
                    "{}",
                    format!("Unknown command {}; /help lists commands.", command).yellow()
                ),
            }
        }
        self.controller.close();
        Ok(())
    }

    async fn ask(&mut self, text: &str, echo: bool) {
        let pending = match self.controller.begin_send(text) {
            Ok(pending) => pending,
            Err(SendRejected::Blank) => return,
            Err(rejected) => {
                println!("{}", rejected.to_string().yellow());
                return;
            }
        };
        if echo {
            if let Some(turn) = self.controller.turns().last() {
                println!("{}", render_turn(turn));
            }
        }
        println!("{}", render_thinking());
        let reply = self.controller.exchange(&pending).await;
        self.controller.complete(pending, reply);
        if let Some(turn) = self.controller.turns().last() {
            println!("{}", render_turn(turn));
        }
    }

    fn open(&mut self, informational: bool) -> Result<()> {
        self.controller.open(informational);
        clear_screen()?;
        self.draw();
        Ok(())
    }

    fn draw(&self) {
        let view = PanelView {
            mode: self.controller.mode(),
            turns: self.controller.turns(),
            busy: self.controller.is_busy(),
            suggestions: self.controller.suggestion_order(),
        };
        println!("{}", render_view(&view));
    }

    fn prompt(&self) -> &'static str {
        match self.controller.mode() {
            None => "closed",
            Some(DisplayMode::Informational) => "/info to go back",
            Some(DisplayMode::Welcome) => "Ask",
            Some(DisplayMode::Chat) => "Ask a follow-up question",
        }
    }
}

fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
