use crate::error::OctoviewError;
use crate::github::types::UserProfile;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    LookupResult {
        query: String,
        result: std::result::Result<UserProfile, OctoviewError>,
    },
}
