#![cfg(test)]

use crate::github::types::UserProfile;
use crate::session::LastQueryStore;
use std::cell::RefCell;
use std::rc::Rc;

pub fn make_profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        html_url: format!("https://github.com/{login}"),
        name: None,
        bio: None,
        public_repos: 8,
        followers: 4,
        following: 9,
    }
}

/// In-memory stand-in for the session file. Clones share the same cell so a
/// test can inspect what the app persisted.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<Option<String>>>);

impl MemoryStore {
    pub fn put(&self, query: &str) {
        *self.0.borrow_mut() = Some(query.to_string());
    }
}

impl LastQueryStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&mut self, query: &str) {
        *self.0.borrow_mut() = Some(query.to_string());
    }
}
