use std::sync::Arc;

use crate::config::Config;
use crate::email::Notifier;
use crate::store::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: SubmissionStore,
    pub mailer: Option<Notifier>,
    pub config: Config,
}
