//! Runtime services and shared state for PsyCare.

use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::Void},
    interaction::{console, session::Session},
    service::actions::ActionClient,
    triage::Classifier,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the classifier, and the action client.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The keyword classifier.
    pub classifier: Classifier,
    /// The outbound action client.
    pub actions: ActionClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Self {
        // Initialize the classifier over the configured locales.
        let classifier = Classifier::new(&config.locales);

        info!("Classifier ready with {} phrases.", classifier.keyword_sets().iter().map(|set| set.phrases().len()).sum::<usize>());

        // Initialize the action client.
        let actions = ActionClient::console();

        Self { config, classifier, actions }
    }

    /// Open a new session with the runtime's services.
    pub fn session(&self) -> Session {
        Session::new(&self.config, self.classifier.clone(), self.actions.clone())
    }

    pub async fn start(&self) -> Void {
        console::run(self.session()).await
    }
}
