//! Line-oriented console front-end for a session.

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};
use tracing::{instrument, warn};

use crate::{
    base::types::{Res, Sender, TranscriptEntry, Void},
    interaction::{
        render,
        session::{Session, SuggestionOutcome},
    },
    triage::crisis::{CrisisCard, Specialist},
};

const HELP: &str = "\
Type a message and press Enter.
  /s N         pick suggestion N of the latest reply
  (empty line) send the pre-filled suggestion
  /call        call the emergency line from the crisis card
  /book        book the specialist shown on the crisis card
  /next /prev  browse crisis specialists
  /transcript  print the transcript as JSON
  /help        show this help
  /quit        leave";

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    SendDraft,
    Suggestion(usize),
    Call,
    Book,
    Next,
    Prev,
    Transcript,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Command::SendDraft;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Send(line.to_string());
        };

        let mut parts = rest.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("s"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Suggestion(n),
                _ => Command::Unknown(trimmed.to_string()),
            },
            (Some("call"), None) => Command::Call,
            (Some("book"), None) => Command::Book,
            (Some("next"), None) => Command::Next,
            (Some("prev"), None) => Command::Prev,
            (Some("transcript"), None) => Command::Transcript,
            (Some("help"), None) => Command::Help,
            (Some("quit"), None) => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

/// UI-side state: the open crisis card, any pre-filled draft, and the id of
/// the last entry displayed.
#[derive(Default)]
struct ConsoleState {
    card: Option<CrisisCard>,
    draft: Option<String>,
    last_shown: u64,
}

impl ConsoleState {
    fn show(&mut self, session: &Session, entry: &TranscriptEntry) {
        if entry.id <= self.last_shown {
            return;
        }

        self.last_shown = entry.id;

        // The terminal already echoes what the user typed.
        if entry.sender == Sender::User {
            return;
        }

        println!("{}", render::entry(entry));

        if entry.triage.as_ref().is_some_and(|t| t.show_crisis_card) {
            let card = session.crisis_card();
            println!("{}", render::crisis_card(&card));
            self.card = Some(card);
        }
    }

    /// Show every transcript entry not displayed yet.
    async fn catch_up(&mut self, session: &Session) {
        for entry in session.transcript().await {
            self.show(session, &entry);
        }
    }

    fn browse(&mut self, step: for<'a> fn(&'a mut CrisisCard) -> &'a Specialist) {
        match self.card.as_mut() {
            Some(card) => {
                step(card);
                println!("{}", render::crisis_card(card));
            }
            None => println!("No crisis card is open."),
        }
    }

    async fn submit(&mut self, session: &Session, text: &str) {
        self.draft = None;

        if session.submit_message(text).await.is_some() {
            println!("psycare is typing...");
        }
    }

    /// Handle one line; returns `false` when the user asked to leave.
    async fn handle(&mut self, session: &Session, line: &str) -> Res<bool> {
        match Command::parse(line) {
            Command::Send(text) => self.submit(session, &text).await,
            Command::SendDraft => {
                if let Some(draft) = self.draft.take() {
                    self.submit(session, &draft).await;
                }
            }
            Command::Suggestion(n) => {
                let label = session.latest_reply().await.and_then(|entry| entry.triage).and_then(|triage| triage.suggestions.get(n - 1).cloned());

                match label {
                    Some(label) => match session.select_suggestion(&label) {
                        SuggestionOutcome::Scheduling(_) => {}
                        SuggestionOutcome::Prefill(text) => {
                            println!("> {text}  (press Enter to send)");
                            self.draft = Some(text);
                        }
                    },
                    None => println!("There is no suggestion {n}."),
                }
            }
            Command::Call => match &self.card {
                Some(_) => {
                    session.request_emergency_call();
                }
                None => println!("No crisis card is open."),
            },
            Command::Book => match &self.card {
                Some(card) => {
                    session.request_scheduling(Some(card.current().reference()));
                }
                None => println!("No crisis card is open."),
            },
            Command::Next => self.browse(CrisisCard::show_next),
            Command::Prev => self.browse(CrisisCard::show_prev),
            Command::Transcript => println!("{}", serde_json::to_string_pretty(&session.transcript().await)?),
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(false),
            Command::Unknown(input) => println!("Unknown command `{input}`. Type /help for commands."),
        }

        Ok(true)
    }
}

/// Run the console loop until `/quit`, end of input, or Ctrl-C.
#[instrument(skip_all)]
pub async fn run(session: Session) -> Void {
    let mut state = ConsoleState::default();
    let mut events = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    state.catch_up(&session).await;

    println!("(type /help for commands)");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                if !state.handle(&session, &line).await? {
                    break;
                }
            }
            event = events.recv() => match event {
                Ok(entry) => state.show(&session, &entry),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Display lagged by {} entries; re-reading the transcript.", skipped);
                    state.catch_up(&session).await;
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
