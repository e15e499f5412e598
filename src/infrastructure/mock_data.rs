use crate::domain::{MatchEntry, Message, Profile};

const PROFILES_JSON: &str = include_str!("../../data/profiles.json");
const MATCHES_JSON: &str = include_str!("../../data/matches.json");
const MESSAGES_JSON: &str = include_str!("../../data/messages.json");

/// The hard-coded tables backing the prototype: the discovery deck, the
/// matches list, and the seed conversation shown when a match is opened.
#[derive(Debug, Clone)]
pub struct MockData {
    pub profiles: Vec<Profile>,
    pub matches: Vec<MatchEntry>,
    pub messages: Vec<Message>,
}

impl MockData {
    /// Parses the embedded JSON tables.
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            profiles: parse(PROFILES_JSON, "profiles")?,
            matches: parse(MATCHES_JSON, "matches")?,
            messages: parse(MESSAGES_JSON, "messages")?,
        })
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, table: &str) -> Result<Vec<T>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} data - {}", table, e))
}
