use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use folio_types::{ContactMessage, ContactSubmission, NewUser, Portfolio, PortfolioData, User};

use crate::Database;
use crate::models::StoreCounts;

impl Database {
    // -- Users --

    /// Does not check that `username` is free; use
    /// [`Database::get_user_by_username`] first if that matters.
    pub fn create_user(&self, new_user: NewUser) -> Result<User> {
        self.with_store_mut(|store| {
            let id = store.take_user_id();
            let user = User {
                id,
                username: new_user.username,
                password: new_user.password,
            };
            store.users.insert(id, user.clone());
            debug!("Created user {}", id);
            Ok(user)
        })
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.with_store(|store| Ok(store.users.get(&id).cloned()))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.with_store(|store| {
            Ok(store
                .users
                .values()
                .find(|user| user.username == username)
                .cloned())
        })
    }

    // -- Portfolios --

    /// Stores already-validated data under the next portfolio id.
    pub fn save_portfolio(&self, data: PortfolioData) -> Result<Portfolio> {
        self.with_store_mut(|store| {
            let id = store.take_portfolio_id();
            let portfolio = Portfolio {
                id,
                user_id: None,
                data,
            };
            store.portfolios.insert(id, portfolio.clone());
            debug!("Saved portfolio {} with {} project(s)", id, portfolio.data.projects.len());
            Ok(portfolio)
        })
    }

    pub fn get_portfolio(&self, id: i64) -> Result<Option<Portfolio>> {
        self.with_store(|store| Ok(store.portfolios.get(&id).cloned()))
    }

    // -- Contact messages --

    /// Stamps `created_at` with the current time. The referenced portfolio is
    /// not looked up here; callers decide whether orphans are acceptable.
    pub fn save_contact_message(&self, submission: ContactSubmission) -> Result<ContactMessage> {
        self.with_store_mut(|store| {
            let id = store.take_contact_id();
            let ContactSubmission { portfolio_id, form } = submission;
            let message = ContactMessage {
                id,
                portfolio_id,
                name: form.name,
                email: form.email,
                message: form.message,
                created_at: Utc::now(),
            };
            store.contact_messages.insert(id, message.clone());
            debug!("Saved contact message {} for portfolio {}", id, portfolio_id);
            Ok(message)
        })
    }

    /// Messages sent to one portfolio, oldest first.
    pub fn contact_messages_for_portfolio(&self, portfolio_id: i64) -> Result<Vec<ContactMessage>> {
        self.with_store(|store| {
            Ok(store
                .contact_messages
                .values()
                .filter(|m| m.portfolio_id == portfolio_id)
                .cloned()
                .collect())
        })
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        self.with_store(|store| {
            Ok(StoreCounts {
                users: store.users.len(),
                portfolios: store.portfolios.len(),
                contact_messages: store.contact_messages.len(),
            })
        })
    }
}
