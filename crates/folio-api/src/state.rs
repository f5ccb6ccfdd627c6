use std::str::FromStr;
use std::sync::Arc;

use folio_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub config: ApiConfig,
}

impl AppStateInner {
    /// Fresh, empty store with the given config.
    pub fn new(config: ApiConfig) -> AppState {
        Arc::new(Self {
            db: Database::new(),
            config,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub orphan_contacts: OrphanContactPolicy,
}

/// What to do with a contact message whose `portfolioId` names no stored
/// portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanContactPolicy {
    /// Answer 404 and store nothing.
    #[default]
    Reject,
    /// Store the message with the dangling reference.
    Accept,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown orphan contact policy '{0}', expected 'reject' or 'accept'")]
pub struct UnknownPolicy(String);

impl FromStr for OrphanContactPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "accept" => Ok(Self::Accept),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
