use std::sync::Arc;

use crate::scoring::ProjectScorer;
use crate::sms::SmsGateway;

/// Shared, read-only request context. Cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    scorer: Arc<ProjectScorer>,
    sms: Arc<SmsGateway>,
}

impl AppState {
    pub fn new(scorer: ProjectScorer, sms: SmsGateway) -> Self {
        Self {
            scorer: Arc::new(scorer),
            sms: Arc::new(sms),
        }
    }

    pub fn scorer(&self) -> &ProjectScorer {
        &self.scorer
    }

    pub fn sms(&self) -> &SmsGateway {
        &self.sms
    }
}
