use serde::{Deserialize, Serialize};

/// A discoverable profile card. The visual payload (image URL, bio, tags) is
/// carried through untouched; nothing in the domain interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub image: String,
    pub location: String,
    pub tags: Vec<String>,
}

/// A matched profile as shown on the matches screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: bool,
}

/// A single chat message. `sender_id` 0 is the local user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender_id: u32,
    pub text: String,
    pub timestamp: String,
}

impl Message {
    pub fn is_from_me(&self) -> bool {
        self.sender_id == 0
    }
}

/// The gesture captured at drag release: signed horizontal distance in layout
/// pixels from the drag start, and signed speed in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub offset: f32,
    pub velocity: f32,
}

impl GestureSample {
    pub fn new(offset: f32, velocity: f32) -> Self {
        Self { offset, velocity }
    }
}

/// The classified outcome of a released swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Swiped right: fling the card off-screen right and remove it.
    Accept,
    /// Swiped left: fling the card off-screen left and remove it.
    Reject,
    /// Below both thresholds: snap the card back, keep it in the deck.
    Cancel,
}

/// The ordered stack of remaining profiles. The last element is the top of
/// the deck and the only card eligible to receive drag input.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Profile>,
}

impl Deck {
    pub fn new(cards: Vec<Profile>) -> Self {
        Self { cards }
    }

    /// The profile currently on top, if any.
    pub fn top(&self) -> Option<&Profile> {
        self.cards.last()
    }

    pub fn is_top(&self, id: u32) -> bool {
        self.top().map(|p| p.id == id).unwrap_or(false)
    }

    /// Cards in stacking order; the last one renders on top.
    pub fn cards(&self) -> &[Profile] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes the profile with the given id, preserving the order of the
    /// rest. Returns the removed profile, or None if the id is not present.
    pub fn remove(&mut self, id: u32) -> Option<Profile> {
        let index = self.cards.iter().position(|p| p.id == id)?;
        Some(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u32, name: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            age: 25,
            bio: String::new(),
            image: String::new(),
            location: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_deck_top_is_last() {
        let deck = Deck::new(vec![profile(1, "A"), profile(2, "B"), profile(3, "C")]);
        assert_eq!(deck.top().unwrap().id, 3);
        assert!(deck.is_top(3));
        assert!(!deck.is_top(1));
    }

    #[test]
    fn test_deck_remove_preserves_order() {
        let mut deck = Deck::new(vec![profile(1, "A"), profile(2, "B"), profile(3, "C")]);
        let removed = deck.remove(3).unwrap();
        assert_eq!(removed.name, "C");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.top().unwrap().id, 2);
        let ids: Vec<u32> = deck.cards().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_deck_remove_missing_id() {
        let mut deck = Deck::new(vec![profile(1, "A")]);
        assert!(deck.remove(99).is_none());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_empty_deck_is_valid() {
        let mut deck = Deck::new(vec![profile(1, "A")]);
        deck.remove(1);
        assert!(deck.is_empty());
        assert!(deck.top().is_none());
        assert!(!deck.is_top(1));
    }

    #[test]
    fn test_message_sender() {
        let mine = Message {
            id: 1,
            sender_id: 0,
            text: "hi".to_string(),
            timestamp: "10:00 AM".to_string(),
        };
        let theirs = Message { sender_id: 1, ..mine.clone() };
        assert!(mine.is_from_me());
        assert!(!theirs.is_from_me());
    }
}
