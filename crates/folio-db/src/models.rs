use std::collections::BTreeMap;

use folio_types::{ContactMessage, Portfolio, User};

/// Keyed collections plus the next id to hand out for each.
///
/// Ids start at 1, only ever increase, and are never reused.
pub struct Store {
    pub(crate) users: BTreeMap<i64, User>,
    pub(crate) portfolios: BTreeMap<i64, Portfolio>,
    pub(crate) contact_messages: BTreeMap<i64, ContactMessage>,
    next_user_id: i64,
    next_portfolio_id: i64,
    next_contact_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            portfolios: BTreeMap::new(),
            contact_messages: BTreeMap::new(),
            next_user_id: 1,
            next_portfolio_id: 1,
            next_contact_id: 1,
        }
    }
}

impl Store {
    pub(crate) fn take_user_id(&mut self) -> i64 {
        take(&mut self.next_user_id)
    }

    pub(crate) fn take_portfolio_id(&mut self) -> i64 {
        take(&mut self.next_portfolio_id)
    }

    pub(crate) fn take_contact_id(&mut self) -> i64 {
        take(&mut self.next_contact_id)
    }
}

fn take(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Number of records held in each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub users: usize,
    pub portfolios: usize,
    pub contact_messages: usize,
}
