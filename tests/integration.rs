#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use psycare::{
    base::{
        config::{Config, ConfigInner},
        types::{Category, Locale, Sender, SpecialistRef, Void},
    },
    interaction::session::{Session, SuggestionOutcome},
    runtime::Runtime,
    service::actions::{ActionClient, GenericActionClient},
    triage::{Classifier, suggestion::SuggestionAction},
};

// Mocks.

// Mock action client for testing.

mock! {
    pub Actions {}

    #[async_trait]
    impl GenericActionClient for Actions {
        async fn request_scheduling(&self, specialist: Option<SpecialistRef>) -> Void;
        async fn request_emergency_call(&self, phone: &str) -> Void;
    }
}

/// A mock that fails the test if any action is emitted.
fn get_silent_actions() -> MockActions {
    let mut mock = MockActions::new();

    mock.expect_request_scheduling().never();
    mock.expect_request_emergency_call().never();

    mock
}

/// Helper function to setup the test environment.
fn setup_test_environment(actions: MockActions) -> Runtime {
    let config = Config {
        inner: Arc::new(ConfigInner {
            typing_delay_ms: 1500,
            ..Default::default()
        }),
    };

    let classifier = Classifier::new(&config.locales);
    let actions = ActionClient::new(Arc::new(actions));

    Runtime { config, classifier, actions }
}

fn setup_session(actions: MockActions) -> Session {
    setup_test_environment(actions).session()
}

#[tokio::test(start_paused = true)]
async fn test_session_starts_with_greeting() {
    let session = setup_session(get_silent_actions());

    let transcript = session.transcript().await;

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].sender, Sender::Assistant);
    assert!(transcript[0].triage.is_none());
    assert!(transcript[0].text.starts_with("Hello!"));
    assert!(session.latest_reply().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_crisis_message_end_to_end() {
    let session = setup_session(get_silent_actions());

    let handle = session.submit_message("I don't want to live anymore").await.expect("message should be accepted");

    // The user entry lands immediately; the reply waits out the typing delay.
    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].sender, Sender::User);
    assert!(transcript[1].triage.is_none());
    assert!(session.is_typing());

    handle.await.unwrap();

    assert!(!session.is_typing());

    let reply = session.latest_reply().await.expect("assistant reply");
    let triage = reply.triage.as_ref().unwrap();

    assert_eq!(session.entry_count().await, 3);
    assert!(matches!(triage.category, Category::Crisis | Category::DeathIdeation));
    assert!(triage.show_crisis_card);
    assert!(triage.needs_professional_help);
    assert!(!reply.text.is_empty());
    assert_eq!(reply.text, triage.response_text);
    assert!(triage.suggestions.iter().any(|s| SuggestionAction::infer(s) == SuggestionAction::Schedule));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_and_work_stress_end_to_end() {
    let session = setup_session(get_silent_actions());

    session.submit_message("I can't sleep and feel overwhelmed with work").await.unwrap().await.unwrap();

    let reply = session.latest_reply().await.unwrap();
    let triage = reply.triage.unwrap();

    assert_eq!(triage.category, Category::MildStress);
    assert!(!triage.needs_professional_help);
    assert!(!triage.show_crisis_card);
    assert!(triage.suggestions.contains(&"Improve sleep hygiene".to_string()));
    assert!(triage.suggestions.contains(&"Consider seeing a psychologist".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_blank_submission_is_ignored() {
    let session = setup_session(get_silent_actions());

    assert!(session.submit_message("").await.is_none());
    assert!(session.submit_message("   \t\n").await.is_none());

    tokio::time::sleep(std::time::Duration::from_secs(5)).await;

    assert_eq!(session.entry_count().await, 1);
    assert!(!session.is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_aborted_reply_clears_typing() {
    let session = setup_session(get_silent_actions());

    let handle = session.submit_message("I feel tired").await.unwrap();
    assert!(session.is_typing());

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    assert!(!session.is_typing());
    assert_eq!(session.entry_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_replies_follow_completion_order() {
    let session = setup_session(get_silent_actions());

    let first = session.submit_message("I've been stressed about work").await.unwrap();
    tokio::time::advance(std::time::Duration::from_millis(500)).await;
    let second = session.submit_message("Hello there").await.unwrap();

    futures::future::join_all([first, second]).await;

    let transcript = session.transcript().await;
    let senders: Vec<Sender> = transcript.iter().map(|e| e.sender).collect();
    let categories: Vec<Option<Category>> = transcript.iter().map(|e| e.triage.as_ref().map(|t| t.category)).collect();

    assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::User, Sender::Assistant, Sender::Assistant]);
    assert_eq!(categories, vec![None, None, None, Some(Category::MildStress), Some(Category::General)]);
    assert!(transcript.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test(start_paused = true)]
async fn test_entries_are_broadcast() {
    let session = setup_session(get_silent_actions());
    let mut events = session.subscribe();

    session.submit_message("Years of this and it keeps getting worse").await.unwrap().await.unwrap();

    let user = events.recv().await.unwrap();
    let reply = events.recv().await.unwrap();

    assert_eq!(user.sender, Sender::User);
    assert_eq!(reply.triage.map(|t| t.category), Some(Category::SevereOrChronic));
}

#[tokio::test(start_paused = true)]
async fn test_scheduling_suggestion_emits_intent() {
    let mut actions = MockActions::new();
    actions.expect_request_scheduling().withf(|specialist| specialist.is_none()).times(1).returning(|_| Ok(()));
    actions.expect_request_emergency_call().never();

    let session = setup_session(actions);

    match session.select_suggestion("Find emergency support") {
        SuggestionOutcome::Scheduling(handle) => handle.await.unwrap(),
        SuggestionOutcome::Prefill(text) => panic!("expected scheduling, got prefill `{text}`"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_follow_up_suggestion_prefills_input() {
    let session = setup_session(get_silent_actions());

    match session.select_suggestion("Crisis helpline numbers") {
        SuggestionOutcome::Prefill(text) => assert_eq!(text, "Crisis helpline numbers"),
        SuggestionOutcome::Scheduling(_) => panic!("expected prefill"),
    }

    // Selecting a chip never touches the transcript.
    assert_eq!(session.entry_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_crisis_card_actions() {
    let mut actions = MockActions::new();
    actions
        .expect_request_scheduling()
        .withf(|specialist| specialist.as_ref().is_some_and(|s| s.name == "Dr. João Silva" && s.title == "Clinical Psychologist"))
        .times(1)
        .returning(|_| Ok(()));
    actions.expect_request_emergency_call().withf(|phone| phone == "(555) 123-4567").times(1).returning(|_| Ok(()));

    let session = setup_session(actions);

    let mut card = session.crisis_card();
    let specialist = card.show_next().reference();

    session.request_scheduling(Some(specialist)).await.unwrap();
    session.request_emergency_call().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_action_failure_is_contained() {
    let mut actions = MockActions::new();
    actions.expect_request_scheduling().returning(|_| Err(anyhow::anyhow!("scheduling view unavailable")));
    actions.expect_request_emergency_call().never();

    let session = setup_session(actions);

    // The failure is logged by the dispatching task, not propagated.
    assert!(session.request_scheduling(None).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_locale_configuration_limits_keywords() {
    let config = Config {
        inner: Arc::new(ConfigInner {
            locales: vec![Locale::En],
            display_locale: Locale::PtBr,
            typing_delay_ms: 0,
            ..Default::default()
        }),
    };
    let runtime = Runtime {
        classifier: Classifier::new(&config.locales),
        actions: ActionClient::new(Arc::new(get_silent_actions())),
        config,
    };
    let session = runtime.session();

    session.submit_message("Estou muito cansada").await.unwrap().await.unwrap();

    let reply = session.latest_reply().await.unwrap();

    assert_eq!(reply.triage.unwrap().category, Category::General);
    assert!(session.crisis_card().resources().contains("188"));
}
