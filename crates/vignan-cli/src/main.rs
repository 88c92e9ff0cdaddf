use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use vignan_core::session::{ChatEntry, ChatSession, ConversationStore, Sender, SubmitOutcome};
use vignan_core::user::{IdentityStore, UserProfile};
use vignan_core::InferenceClient;
use vignan_infrastructure::{
    load_backend_config, AssistantPaths, JsonConversationStore, JsonIdentityStore,
};
use vignan_interaction::HttpInferenceClient;

#[derive(Parser)]
#[command(name = "vignan")]
#[command(about = "Vignan Assistant - university chat client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the local identity the chat screen requires
    Login,
    /// Open the chat session (the default)
    Chat,
    /// Clear the stored identity; chat history is kept
    Logout,
}

/// REPL helper providing completion, highlighting, and hints for the
/// in-chat slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/mode".to_string(),
                "/clear".to_string(),
                "/logout".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let paths = AssistantPaths::default_location()?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Login => login(&paths).await,
        Commands::Chat => chat(&paths).await,
        Commands::Logout => logout(&paths).await,
    }
}

async fn login(paths: &AssistantPaths) -> Result<()> {
    let identity = JsonIdentityStore::new(paths);

    // Mirrors the login screen redirect: an existing profile goes straight
    // to chat instead of being overwritten.
    if let Some(profile) = identity.load().await? {
        println!(
            "{}",
            format!(
                "Already logged in as {} ({}). Run 'vignan chat' to talk, or 'vignan logout' first.",
                profile.name, profile.reg_no
            )
            .yellow()
        );
        return Ok(());
    }

    println!("{}", "=== Vignan AI - Student Assistant Portal ===".bright_magenta().bold());

    let mut rl = rustyline::DefaultEditor::new()?;
    let profile = loop {
        let name = rl.readline("Student Name: ")?;
        let reg_no = rl.readline("Register Number: ")?;

        match UserProfile::new(name.trim(), reg_no.trim()) {
            Ok(profile) => break profile,
            Err(err) => println!("{}", format!("{}", err).red()),
        }
    };

    identity.save(&profile).await?;
    println!(
        "{}",
        format!("Welcome, {}! Run 'vignan chat' to start.", profile.name).bright_green()
    );
    Ok(())
}

async fn logout(paths: &AssistantPaths) -> Result<()> {
    let identity = JsonIdentityStore::new(paths);

    if identity.load().await?.is_none() {
        println!("{}", "Not logged in.".bright_black());
        return Ok(());
    }

    identity.clear().await?;
    println!("{}", "Logged out. Chat history is kept.".bright_green());
    Ok(())
}

async fn chat(paths: &AssistantPaths) -> Result<()> {
    let config = load_backend_config(paths)?;
    let http_client = HttpInferenceClient::from_config(&config)?;

    let identity: Arc<dyn IdentityStore> = Arc::new(JsonIdentityStore::new(paths));
    let history: Arc<dyn ConversationStore> = Arc::new(JsonConversationStore::new(paths));
    let inference: Arc<dyn InferenceClient> = Arc::new(http_client.clone());

    let mut session = match ChatSession::resume(identity, history, inference).await {
        Ok(session) => session,
        Err(err) if err.is_not_authorized() => {
            println!("{}", "Not logged in. Run 'vignan login' first.".yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // Advisory startup probe; a dead backend still lets the user read
    // their history.
    if let Err(err) = http_client.health().await {
        println!(
            "{}",
            format!("Warning: backend at {} is not responding ({})", config.base_url, err).yellow()
        );
    }

    println!("{}", "=== Vignan Assistant ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "{} ({}) - {}",
            session.profile().name,
            session.profile().reg_no,
            session.mode().label()
        )
        .bright_black()
    );
    println!(
        "{}",
        "Type '/mode' to switch modes, '/clear' to delete history, '/logout' or 'quit' to leave."
            .bright_black()
    );
    println!();

    if session.entries().is_empty() {
        println!("{}", "Ask me anything about Vignan University...".bright_black());
    } else {
        for entry in session.entries() {
            print_entry(entry);
        }
    }
    println!();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    loop {
        let prompt = format!("[{}] >> ", session.mode());

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/mode" => {
                        let mode = session.toggle_mode();
                        println!("{}", format!("Switched to {}", mode.label()).bright_cyan());
                    }
                    "/clear" => {
                        let answer = rl.readline("Delete all chat history? (y/n) ")?;
                        let confirmed =
                            matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
                        if session.clear_history(confirmed).await? {
                            println!("{}", "Chat history cleared.".bright_green());
                        } else {
                            println!("{}", "Kept.".bright_black());
                        }
                    }
                    "/logout" => {
                        session.logout().await?;
                        println!("{}", "Logged out. Chat history is kept.".bright_green());
                        return Ok(());
                    }
                    _ => {
                        println!("{}", "Generating response...".bright_black());
                        match session.submit(trimmed).await? {
                            SubmitOutcome::Replied(entry) | SubmitOutcome::Failed(entry) => {
                                print_entry(&entry)
                            }
                            SubmitOutcome::Rejected => {}
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &ChatEntry) {
    let stamp = chrono::DateTime::parse_from_rfc3339(&entry.timestamp)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default();

    match entry.sender {
        Sender::User => {
            println!("{}", format!("[{}] You: {}", stamp, entry.text).green());
        }
        Sender::Bot if entry.is_error => {
            println!("{}", format!("[{}] Assistant: {}", stamp, entry.text).yellow());
        }
        Sender::Bot => {
            println!("{}", format!("[{}] Assistant:", stamp).bright_magenta());
            for line in entry.text.lines() {
                println!("{}", line.bright_blue());
            }
        }
    }
}
