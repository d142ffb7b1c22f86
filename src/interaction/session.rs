//! The session orchestrator: owns the transcript and turns submissions into replies.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::{Mutex, broadcast},
    task::JoinHandle,
};
use tracing::{Instrument, debug, error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Locale, Sender, SpecialistRef, TranscriptEntry, Void},
    },
    service::actions::ActionClient,
    triage::{Classifier, crisis::CrisisCard, suggestion::SuggestionAction},
};

/// Capacity of the entry broadcast channel.
const EVENT_CAPACITY: usize = 64;

/// What happened when a suggestion chip was selected.
#[derive(Debug)]
pub enum SuggestionOutcome {
    /// A scheduling intent was emitted; the handle resolves once the
    /// collaborator has been called.
    Scheduling(JoinHandle<()>),
    /// The label should be placed in the input field.
    Prefill(String),
}

/// A single conversation.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    classifier: Classifier,
    actions: ActionClient,
    typing_delay: Duration,
    emergency_phone: String,
    display_locale: Locale,
    transcript: Mutex<Vec<TranscriptEntry>>,
    next_id: AtomicU64,
    pending: AtomicUsize,
    events: broadcast::Sender<TranscriptEntry>,
}

impl Session {
    /// Start a session whose transcript holds only the greeting.
    pub fn new(config: &Config, classifier: Classifier, actions: ActionClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(SessionInner {
                classifier,
                actions,
                typing_delay: config.typing_delay(),
                emergency_phone: config.emergency_phone.clone(),
                display_locale: config.display_locale,
                transcript: Mutex::new(vec![TranscriptEntry::greeting(1, config.greeting.clone())]),
                next_id: AtomicU64::new(2),
                pending: AtomicUsize::new(0),
                events,
            }),
        }
    }

    /// Receive every entry appended from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEntry> {
        self.inner.events.subscribe()
    }

    /// A snapshot of the transcript in append order.
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.inner.transcript.lock().await.clone()
    }

    pub async fn entry_count(&self) -> usize {
        self.inner.transcript.lock().await.len()
    }

    /// The most recent assistant entry that carries a triage result.
    pub async fn latest_reply(&self) -> Option<TranscriptEntry> {
        self.inner
            .transcript
            .lock()
            .await
            .iter()
            .rev()
            .find(|entry| entry.sender == Sender::Assistant && entry.triage.is_some())
            .cloned()
    }

    /// Whether any reply is still waiting out its typing delay.
    pub fn is_typing(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }

    /// A fresh crisis card in the configured display language.
    pub fn crisis_card(&self) -> CrisisCard {
        CrisisCard::new(self.inner.display_locale)
    }

    /// Submit a user message.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user entry is
    /// appended immediately and the reply is appended by a spawned task once
    /// the typing delay has elapsed; the returned handle resolves after that.
    #[instrument(skip_all)]
    pub async fn submit_message(&self, text: &str) -> Option<JoinHandle<()>> {
        if text.trim().is_empty() {
            debug!("Ignoring blank submission.");
            return None;
        }

        self.append(|id| TranscriptEntry::user(id, text)).await;

        let triage = self.inner.classifier.classify(text);
        info!("Message triaged as {}.", triage.category);

        let typing = Typing::start(self.clone());
        let delay = self.inner.typing_delay;

        let handle = tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;

                typing.session.append(|id| TranscriptEntry::reply(id, triage)).await;
            }
            .in_current_span(),
        );

        Some(handle)
    }

    /// Act on a suggestion chip: scheduling labels emit a scheduling intent,
    /// anything else is handed back to pre-fill the input.
    #[instrument(skip(self))]
    pub fn select_suggestion(&self, label: &str) -> SuggestionOutcome {
        match SuggestionAction::infer(label) {
            SuggestionAction::Schedule => SuggestionOutcome::Scheduling(self.request_scheduling(None)),
            SuggestionAction::FollowUp => SuggestionOutcome::Prefill(label.to_string()),
        }
    }

    /// Emit a scheduling intent, optionally naming a specialist.
    #[instrument(skip(self))]
    pub fn request_scheduling(&self, specialist: Option<SpecialistRef>) -> JoinHandle<()> {
        let actions = self.inner.actions.clone();

        dispatch(async move { actions.request_scheduling(specialist).await })
    }

    /// Emit an intent to dial the emergency contact number.
    #[instrument(skip(self))]
    pub fn request_emergency_call(&self) -> JoinHandle<()> {
        let actions = self.inner.actions.clone();
        let phone = self.inner.emergency_phone.clone();

        dispatch(async move { actions.request_emergency_call(&phone).await })
    }

    async fn append(&self, make: impl FnOnce(u64) -> TranscriptEntry) {
        let mut transcript = self.inner.transcript.lock().await;
        let entry = make(self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        transcript.push(entry.clone());

        // Sent under the lock so subscribers see ids in transcript order.
        // No subscribers is fine; the transcript is the source of truth.
        let _ = self.inner.events.send(entry);
    }
}

/// Marks one reply as pending for as long as it is alive.
///
/// Dropping it (reply appended, task aborted, or task panicked) clears the mark.
struct Typing {
    session: Session,
}

impl Typing {
    fn start(session: Session) -> Self {
        session.inner.pending.fetch_add(1, Ordering::SeqCst);

        Self { session }
    }
}

impl Drop for Typing {
    fn drop(&mut self) {
        self.session.inner.pending.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Run an outbound action on its own task, logging any failure.
fn dispatch<F>(action: F) -> JoinHandle<()>
where
    F: Future<Output = Void> + Send + 'static,
{
    tokio::spawn(
        async move {
            if let Err(err) = action.await {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    )
}
