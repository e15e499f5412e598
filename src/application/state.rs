//! Application state for the terminal dating-app prototype.
//!
//! One [`App`] value owns every piece of view state: which screen is shown,
//! the onboarding step, the discovery deck and its in-flight gesture, and the
//! chat conversation. All transitions are direct and synchronous; the only
//! time-based state (the mock login delay and the card animations) is
//! advanced by [`App::tick`], which the event loop calls with the current
//! instant so tests can drive time deterministically.

use crate::domain::{
    CardFling, Deck, Decision, GestureSample, MatchEntry, Message, Profile, SnapBack,
    SwipeClassifier,
};
use crate::infrastructure::MockData;
use std::time::{Duration, Instant};

/// How long the mock login pretends to send a code before it succeeds.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Layout pixels represented by one terminal column. A drag across ten
/// columns crosses the 100 px decision threshold.
pub const PX_PER_CELL: f32 = 10.0;

/// Synthetic release velocity used by the keyboard Like/Nope controls; fast
/// enough to clear the velocity threshold in either direction.
const KEY_SWIPE_VELOCITY: f32 = 600.0;

/// Number of onboarding steps.
pub const ONBOARDING_STEPS: u8 = 3;

/// Which screen the application is currently showing.
///
/// Navigation between screens is always a direct, unconditional jump
/// triggered by a key press or by the login timer resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with the two entry actions
    Welcome,
    /// Phone-number login stub
    Login,
    /// Linear three-step profile setup
    Onboarding,
    /// Swipeable profile deck
    Discover,
    /// Matches list and conversation view
    Chat,
}

/// The two actions offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    FindYourMatch,
    SignIn,
}

impl WelcomeAction {
    pub fn toggled(self) -> Self {
        match self {
            WelcomeAction::FindYourMatch => WelcomeAction::SignIn,
            WelcomeAction::SignIn => WelcomeAction::FindYourMatch,
        }
    }
}

/// Phone-login state. Submitting a non-empty number starts the mock delay;
/// the timer always fires exactly once and cannot fail or be cancelled.
#[derive(Debug, Default)]
pub struct LoginState {
    pub phone_input: String,
    pub cursor_position: usize,
    /// When the mock "Sending Code..." delay started, if in flight.
    pub sending_since: Option<Instant>,
}

impl LoginState {
    pub fn is_sending(&self) -> bool {
        self.sending_since.is_some()
    }
}

/// Gender options offered on onboarding step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
        }
    }
}

/// The input field currently focused within the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingField {
    Name,
    Age,
    Gender,
    Bio,
    /// Step 3 has no editable fields, only the photo placeholder grid.
    Photos,
}

/// Onboarding form state: a linear three-step sequence with unrestricted
/// forward/back movement and no validation gating step transitions.
#[derive(Debug)]
pub struct OnboardingState {
    pub step: u8,
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub bio: String,
    pub focus: OnboardingField,
    pub cursor_position: usize,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: 1,
            name: String::new(),
            age: String::new(),
            gender: None,
            bio: String::new(),
            focus: OnboardingField::Name,
            cursor_position: 0,
        }
    }
}

impl OnboardingState {
    fn first_field(step: u8) -> OnboardingField {
        match step {
            1 => OnboardingField::Name,
            2 => OnboardingField::Bio,
            _ => OnboardingField::Photos,
        }
    }

    /// The editable text buffer behind the focused field, if it has one.
    pub fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            OnboardingField::Name => Some(&mut self.name),
            OnboardingField::Age => Some(&mut self.age),
            OnboardingField::Bio => Some(&mut self.bio),
            OnboardingField::Gender | OnboardingField::Photos => None,
        }
    }
}

/// An in-progress drag on the top card.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Terminal column where the drag started.
    pub start_column: u16,
    /// Live horizontal offset in layout px.
    pub offset: f32,
    /// Instantaneous horizontal velocity in layout px/s.
    pub velocity: f32,
    last_moved: Instant,
}

/// The animation currently playing on the top card, if any. While one is
/// running the deck accepts no new drag input.
#[derive(Debug, Clone, Copy)]
pub enum CardAnimation {
    /// Decided card flying off-screen; the profile is removed when it ends.
    Fling {
        profile_id: u32,
        fling: CardFling,
        started: Instant,
    },
    /// Cancelled drag springing back to the origin.
    SnapBack { spring: SnapBack, last_tick: Instant },
}

/// Discovery-deck state: the deck itself, the live gesture, and the running
/// card animation. The deck is owned here exclusively; no other component
/// mutates it.
#[derive(Debug, Default)]
pub struct DiscoverState {
    pub deck: Deck,
    pub drag: Option<DragState>,
    pub animation: Option<CardAnimation>,
    /// Card rectangle (x, y, width, height) published by the renderer so
    /// mouse hits can be tested against it.
    pub card_area: Option<(u16, u16, u16, u16)>,
}

impl DiscoverState {
    /// The top card's horizontal offset in layout px at `now`, whether it
    /// comes from a live drag or a running animation.
    pub fn card_offset(&self, now: Instant) -> f32 {
        if let Some(drag) = &self.drag {
            return drag.offset;
        }
        match &self.animation {
            Some(CardAnimation::Fling { fling, started, .. }) => {
                fling.offset_at(now.duration_since(*started))
            }
            Some(CardAnimation::SnapBack { spring, .. }) => spring.position(),
            None => 0.0,
        }
    }

    /// The top card's opacity at `now`; fades only during a fling.
    pub fn card_opacity(&self, now: Instant) -> f32 {
        match &self.animation {
            Some(CardAnimation::Fling { fling, started, .. }) => {
                fling.opacity_at(now.duration_since(*started))
            }
            _ => 1.0,
        }
    }

    fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Which level of the chat screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatView {
    MatchList,
    Conversation,
}

/// Chat screen state: the selected match, the open conversation, and the
/// message composer.
#[derive(Debug)]
pub struct ChatState {
    pub view: ChatView,
    /// Index into the matches list driven by the selection keys.
    pub selected: usize,
    /// Id of the match whose conversation is open.
    pub active_match: Option<u32>,
    pub messages: Vec<Message>,
    pub input: String,
    pub cursor_position: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            view: ChatView::MatchList,
            selected: 0,
            active_match: None,
            messages: Vec::new(),
            input: String::new(),
            cursor_position: 0,
        }
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use dilmil::application::{App, Screen};
/// use dilmil::infrastructure::MockData;
///
/// let app = App::new(MockData::load().unwrap());
/// assert_eq!(app.screen, Screen::Welcome);
/// assert_eq!(app.discover.deck.len(), 4);
/// ```
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub welcome_action: WelcomeAction,
    pub login: LoginState,
    pub onboarding: OnboardingState,
    pub discover: DiscoverState,
    pub chat: ChatState,
    pub matches: Vec<MatchEntry>,
    /// Pristine copy of the seeded deck, used by the empty-deck reset.
    roster: Vec<Profile>,
}

impl App {
    pub fn new(data: MockData) -> Self {
        Self {
            screen: Screen::Welcome,
            welcome_action: WelcomeAction::FindYourMatch,
            login: LoginState::default(),
            onboarding: OnboardingState::default(),
            discover: DiscoverState {
                deck: Deck::new(data.profiles.clone()),
                ..DiscoverState::default()
            },
            chat: ChatState {
                messages: data.messages,
                ..ChatState::default()
            },
            matches: data.matches,
            roster: data.profiles,
        }
    }

    /// Jumps directly to another screen. Jumps are unconditional; any live
    /// drag is dropped since the deck is no longer on screen.
    pub fn go_to(&mut self, screen: Screen) {
        self.discover.drag = None;
        self.screen = screen;
    }

    // --- Welcome ---

    pub fn toggle_welcome_action(&mut self) {
        self.welcome_action = self.welcome_action.toggled();
    }

    /// Activates the highlighted welcome action.
    pub fn activate_welcome_action(&mut self) {
        match self.welcome_action {
            WelcomeAction::FindYourMatch => self.go_to(Screen::Onboarding),
            WelcomeAction::SignIn => self.go_to(Screen::Login),
        }
    }

    // --- Login ---

    /// Submits the phone number. Requires a non-empty number and no send
    /// already in flight; the mock delay then resolves via [`App::tick`].
    pub fn submit_login(&mut self, now: Instant) {
        if self.login.phone_input.trim().is_empty() || self.login.is_sending() {
            return;
        }
        self.login.sending_since = Some(now);
    }

    // --- Onboarding ---

    /// Moves forward one step, or completes setup on the last step and lands
    /// on the discovery deck. Never gated on field contents.
    pub fn onboarding_advance(&mut self) {
        if self.onboarding.step < ONBOARDING_STEPS {
            self.onboarding.step += 1;
            self.onboarding.focus = OnboardingState::first_field(self.onboarding.step);
            self.onboarding.cursor_position = 0;
        } else {
            self.go_to(Screen::Discover);
        }
    }

    /// Moves back one step; disabled on step 1.
    pub fn onboarding_back(&mut self) {
        if self.onboarding.step > 1 {
            self.onboarding.step -= 1;
            self.onboarding.focus = OnboardingState::first_field(self.onboarding.step);
            self.onboarding.cursor_position = 0;
        }
    }

    /// Cycles focus across the fields of the current step.
    pub fn onboarding_focus_next(&mut self) {
        self.onboarding.focus = match (self.onboarding.step, self.onboarding.focus) {
            (1, OnboardingField::Name) => OnboardingField::Age,
            (1, OnboardingField::Age) => OnboardingField::Gender,
            (1, OnboardingField::Gender) => OnboardingField::Name,
            (_, focus) => focus,
        };
        self.onboarding.cursor_position = self.onboarding_focused_len();
    }

    pub fn onboarding_focus_prev(&mut self) {
        self.onboarding.focus = match (self.onboarding.step, self.onboarding.focus) {
            (1, OnboardingField::Name) => OnboardingField::Gender,
            (1, OnboardingField::Age) => OnboardingField::Name,
            (1, OnboardingField::Gender) => OnboardingField::Age,
            (_, focus) => focus,
        };
        self.onboarding.cursor_position = self.onboarding_focused_len();
    }

    // Cursor position in characters, so switching focus places the cursor
    // at the end of multi-byte text too.
    fn onboarding_focused_len(&mut self) -> usize {
        self.onboarding
            .focused_text()
            .map(|t| t.chars().count())
            .unwrap_or(0)
    }

    /// Cycles the gender choice left or right through the fixed options.
    pub fn cycle_gender(&mut self, forward: bool) {
        let all = Gender::ALL;
        let current = self
            .onboarding
            .gender
            .and_then(|g| all.iter().position(|&o| o == g));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => all.len() - 1,
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
        };
        self.onboarding.gender = Some(all[next]);
    }

    // --- Discover ---

    /// Starts a drag on the top card. Ignored when the deck is empty or a
    /// card animation is still playing; cards beneath the top never receive
    /// input.
    pub fn begin_drag(&mut self, column: u16, now: Instant) {
        if self.discover.deck.is_empty() || self.discover.is_animating() {
            return;
        }
        self.discover.drag = Some(DragState {
            start_column: column,
            offset: 0.0,
            velocity: 0.0,
            last_moved: now,
        });
    }

    /// Updates the live drag from a pointer move. The terminal column delta
    /// converts to layout px; velocity is the instantaneous px/s between
    /// this move and the previous one.
    pub fn update_drag(&mut self, column: u16, now: Instant) {
        let Some(drag) = &mut self.discover.drag else {
            return;
        };
        let offset = (column as f32 - drag.start_column as f32) * PX_PER_CELL;
        let dt = now.duration_since(drag.last_moved).as_secs_f32();
        if dt > 0.0 {
            drag.velocity = (offset - drag.offset) / dt;
        }
        drag.offset = offset;
        drag.last_moved = now;
    }

    /// Resolves the drag into a [`Decision`] and starts the matching card
    /// animation. Accept and Reject fling the card off-screen (the profile is
    /// removed once the fling ends); Cancel springs it back and leaves the
    /// deck untouched.
    pub fn release_drag(&mut self, now: Instant) -> Option<Decision> {
        let drag = self.discover.drag.take()?;
        let sample = GestureSample::new(drag.offset, drag.velocity);
        Some(self.resolve_gesture(sample, now))
    }

    /// Keyboard Like control: synthesizes a rightward flick past the
    /// velocity threshold so it flows through the same classifier path.
    pub fn swipe_right(&mut self, now: Instant) {
        self.keyboard_swipe(KEY_SWIPE_VELOCITY, now);
    }

    /// Keyboard Nope control, mirroring [`App::swipe_right`].
    pub fn swipe_left(&mut self, now: Instant) {
        self.keyboard_swipe(-KEY_SWIPE_VELOCITY, now);
    }

    fn keyboard_swipe(&mut self, velocity: f32, now: Instant) {
        // A live pointer drag owns the card; its release resolves the
        // gesture, so keyboard swipes are ignored until then.
        if self.discover.deck.is_empty()
            || self.discover.is_animating()
            || self.discover.drag.is_some()
        {
            return;
        }
        self.resolve_gesture(GestureSample::new(0.0, velocity), now);
    }

    fn resolve_gesture(&mut self, sample: GestureSample, now: Instant) -> Decision {
        let decision = SwipeClassifier::classify(sample);
        let Some(top) = self.discover.deck.top() else {
            return decision;
        };
        let profile_id = top.id;
        self.discover.animation = match decision {
            Decision::Accept => Some(CardAnimation::Fling {
                profile_id,
                fling: CardFling::accept(sample.offset),
                started: now,
            }),
            Decision::Reject => Some(CardAnimation::Fling {
                profile_id,
                fling: CardFling::reject(sample.offset),
                started: now,
            }),
            Decision::Cancel => {
                let spring = SnapBack::new(sample.offset, sample.velocity);
                if spring.is_settled() {
                    None
                } else {
                    Some(CardAnimation::SnapBack {
                        spring,
                        last_tick: now,
                    })
                }
            }
        };
        decision
    }

    /// Restores the original full deck in its original order. Only offered
    /// once the deck has emptied.
    pub fn reset_deck(&mut self) {
        if self.discover.deck.is_empty() {
            self.discover.deck = Deck::new(self.roster.clone());
            self.discover.animation = None;
        }
    }

    // --- Chat ---

    pub fn select_next_match(&mut self) {
        if !self.matches.is_empty() {
            self.chat.selected = (self.chat.selected + 1) % self.matches.len();
        }
    }

    pub fn select_prev_match(&mut self) {
        if !self.matches.is_empty() {
            self.chat.selected =
                (self.chat.selected + self.matches.len() - 1) % self.matches.len();
        }
    }

    /// Opens the conversation with the selected match and clears its unread
    /// badge.
    pub fn open_selected_match(&mut self) {
        if let Some(entry) = self.matches.get_mut(self.chat.selected) {
            entry.unread = false;
            self.chat.active_match = Some(entry.id);
            self.chat.view = ChatView::Conversation;
        }
    }

    pub fn close_conversation(&mut self) {
        self.chat.active_match = None;
        self.chat.view = ChatView::MatchList;
        self.chat.input.clear();
        self.chat.cursor_position = 0;
    }

    /// The match whose conversation is open, if any.
    pub fn active_match(&self) -> Option<&MatchEntry> {
        let id = self.chat.active_match?;
        self.matches.iter().find(|m| m.id == id)
    }

    /// Appends the composed message if its trimmed text is non-empty;
    /// whitespace-only input is silently ignored, never reported as an
    /// error. Always succeeds for non-empty text.
    pub fn send_message(&mut self) {
        if self.chat.input.trim().is_empty() {
            return;
        }
        let id = self.chat.messages.len() as u32 + 1;
        let text = std::mem::take(&mut self.chat.input);
        self.chat.messages.push(Message {
            id,
            sender_id: 0,
            text,
            timestamp: "Just now".to_string(),
        });
        self.chat.cursor_position = 0;
    }

    // --- Time-based state ---

    /// Advances the login delay and the card animations to `now`. Called
    /// from the event loop on every tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(since) = self.login.sending_since {
            if now.duration_since(since) >= LOGIN_DELAY {
                self.login.sending_since = None;
                self.go_to(Screen::Discover);
            }
        }

        match &mut self.discover.animation {
            Some(CardAnimation::Fling {
                profile_id,
                fling,
                started,
            }) => {
                if fling.is_finished(now.duration_since(*started)) {
                    let id = *profile_id;
                    self.discover.deck.remove(id);
                    self.discover.animation = None;
                }
            }
            Some(CardAnimation::SnapBack { spring, last_tick }) => {
                let dt = now.duration_since(*last_tick).as_secs_f32();
                spring.step(dt);
                *last_tick = now;
                if spring.is_settled() {
                    self.discover.animation = None;
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FLING_DURATION;

    fn app() -> App {
        App::new(MockData::load().unwrap())
    }

    /// Drives a drag to the given offset (in px) and releases it.
    fn drag_and_release(app: &mut App, px: f32, now: Instant) -> Option<Decision> {
        let cells = (px / PX_PER_CELL) as i32;
        let start = 100u16;
        app.begin_drag(start, now);
        app.update_drag(
            (start as i32 + cells) as u16,
            now + Duration::from_millis(400),
        );
        app.release_drag(now + Duration::from_millis(400))
    }

    /// Ticks well past any fling so the deck mutation applies.
    fn finish_animation(app: &mut App, now: Instant) {
        app.tick(now + Duration::from_secs(1));
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.screen, Screen::Welcome);
        assert_eq!(app.welcome_action, WelcomeAction::FindYourMatch);
        assert_eq!(app.discover.deck.len(), 4);
        assert_eq!(app.matches.len(), 3);
        assert_eq!(app.chat.messages.len(), 4);
        assert!(!app.login.is_sending());
    }

    #[test]
    fn test_welcome_actions_navigate() {
        let mut app = app();
        app.activate_welcome_action();
        assert_eq!(app.screen, Screen::Onboarding);

        let mut app = self::app();
        app.toggle_welcome_action();
        assert_eq!(app.welcome_action, WelcomeAction::SignIn);
        app.activate_welcome_action();
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_login_requires_phone_number() {
        let mut app = app();
        app.go_to(Screen::Login);
        app.submit_login(Instant::now());
        assert!(!app.login.is_sending());

        app.login.phone_input = "   ".to_string();
        app.submit_login(Instant::now());
        assert!(!app.login.is_sending());

        app.login.phone_input = "+1 (555) 000-0000".to_string();
        app.submit_login(Instant::now());
        assert!(app.login.is_sending());
    }

    #[test]
    fn test_login_delay_resolves_once() {
        let mut app = app();
        app.go_to(Screen::Login);
        app.login.phone_input = "5550000".to_string();
        let start = Instant::now();
        app.submit_login(start);

        // Still sending just before the delay elapses.
        app.tick(start + Duration::from_millis(1400));
        assert_eq!(app.screen, Screen::Login);
        assert!(app.login.is_sending());

        app.tick(start + Duration::from_millis(1500));
        assert_eq!(app.screen, Screen::Discover);
        assert!(!app.login.is_sending());
    }

    #[test]
    fn test_login_submit_is_idempotent_while_sending() {
        let mut app = app();
        app.login.phone_input = "5550000".to_string();
        let start = Instant::now();
        app.submit_login(start);
        // A second submit must not restart the timer.
        app.submit_login(start + Duration::from_millis(1000));
        app.tick(start + Duration::from_millis(1500));
        assert_eq!(app.screen, Screen::Discover);
    }

    #[test]
    fn test_onboarding_is_linear_and_unrestricted() {
        let mut app = app();
        app.go_to(Screen::Onboarding);
        assert_eq!(app.onboarding.step, 1);

        // Back is disabled on step 1.
        app.onboarding_back();
        assert_eq!(app.onboarding.step, 1);

        app.onboarding_advance();
        assert_eq!(app.onboarding.step, 2);
        assert_eq!(app.onboarding.focus, OnboardingField::Bio);
        app.onboarding_advance();
        assert_eq!(app.onboarding.step, 3);
        assert_eq!(app.onboarding.focus, OnboardingField::Photos);
        app.onboarding_back();
        assert_eq!(app.onboarding.step, 2);
        app.onboarding_advance();

        // No validation: empty form completes fine.
        app.onboarding_advance();
        assert_eq!(app.screen, Screen::Discover);
    }

    #[test]
    fn test_onboarding_field_focus_cycles() {
        let mut app = app();
        assert_eq!(app.onboarding.focus, OnboardingField::Name);
        app.onboarding_focus_next();
        assert_eq!(app.onboarding.focus, OnboardingField::Age);
        app.onboarding_focus_next();
        assert_eq!(app.onboarding.focus, OnboardingField::Gender);
        app.onboarding_focus_next();
        assert_eq!(app.onboarding.focus, OnboardingField::Name);
        app.onboarding_focus_prev();
        assert_eq!(app.onboarding.focus, OnboardingField::Gender);
    }

    #[test]
    fn test_gender_cycles_through_options() {
        let mut app = app();
        assert!(app.onboarding.gender.is_none());
        app.cycle_gender(true);
        assert_eq!(app.onboarding.gender, Some(Gender::Male));
        app.cycle_gender(true);
        assert_eq!(app.onboarding.gender, Some(Gender::Female));
        app.cycle_gender(true);
        assert_eq!(app.onboarding.gender, Some(Gender::NonBinary));
        app.cycle_gender(true);
        assert_eq!(app.onboarding.gender, Some(Gender::Male));
        app.cycle_gender(false);
        assert_eq!(app.onboarding.gender, Some(Gender::NonBinary));
    }

    #[test]
    fn test_accept_swipe_removes_top_card() {
        let mut app = app();
        let now = Instant::now();
        let top_id = app.discover.deck.top().unwrap().id;

        let decision = drag_and_release(&mut app, 150.0, now);
        assert_eq!(decision, Some(Decision::Accept));
        // Removal is deferred until the fling lands.
        assert_eq!(app.discover.deck.len(), 4);
        finish_animation(&mut app, now);
        assert_eq!(app.discover.deck.len(), 3);
        assert!(!app.discover.deck.is_top(top_id));
    }

    #[test]
    fn test_reject_by_velocity_despite_small_offset() {
        let mut app = app();
        let now = Instant::now();
        app.begin_drag(100, now);
        // 5 cells left in 20 ms: offset -50 px, velocity -2500 px/s.
        app.update_drag(95, now + Duration::from_millis(20));
        let decision = app.release_drag(now + Duration::from_millis(20));
        assert_eq!(decision, Some(Decision::Reject));
        finish_animation(&mut app, now);
        assert_eq!(app.discover.deck.len(), 3);
    }

    #[test]
    fn test_cancel_keeps_deck_and_snaps_back() {
        let mut app = app();
        let now = Instant::now();
        let decision = drag_and_release(&mut app, 50.0, now);
        assert_eq!(decision, Some(Decision::Cancel));
        assert!(matches!(
            app.discover.animation,
            Some(CardAnimation::SnapBack { .. })
        ));
        // The spring settles and the deck is untouched.
        for i in 1..200u64 {
            app.tick(now + Duration::from_millis(400 + i * 16));
        }
        assert!(app.discover.animation.is_none());
        assert_eq!(app.discover.deck.len(), 4);
    }

    #[test]
    fn test_release_at_origin_needs_no_animation() {
        let mut app = app();
        let now = Instant::now();
        app.begin_drag(100, now);
        let decision = app.release_drag(now + Duration::from_millis(100));
        assert_eq!(decision, Some(Decision::Cancel));
        assert!(app.discover.animation.is_none());
    }

    #[test]
    fn test_no_drag_while_animation_plays() {
        let mut app = app();
        let now = Instant::now();
        drag_and_release(&mut app, 150.0, now);
        app.begin_drag(100, now + Duration::from_millis(450));
        assert!(app.discover.drag.is_none());
    }

    #[test]
    fn test_keyboard_swipes_empty_the_deck() {
        let mut app = app();
        let mut now = Instant::now();
        for _ in 0..4 {
            app.swipe_right(now);
            finish_animation(&mut app, now);
            now += Duration::from_millis(500);
        }
        assert!(app.discover.deck.is_empty());
        // Further swipes on the empty deck are no-ops.
        app.swipe_left(now);
        assert!(app.discover.animation.is_none());
    }

    #[test]
    fn test_reset_restores_original_deck_order() {
        let mut app = app();
        let mut now = Instant::now();
        let original: Vec<u32> = app.discover.deck.cards().iter().map(|p| p.id).collect();

        for _ in 0..4 {
            app.swipe_left(now);
            finish_animation(&mut app, now);
            now += Duration::from_millis(500);
        }
        assert!(app.discover.deck.is_empty());

        app.reset_deck();
        let restored: Vec<u32> = app.discover.deck.cards().iter().map(|p| p.id).collect();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_reset_is_noop_on_nonempty_deck() {
        let mut app = app();
        let now = Instant::now();
        app.swipe_right(now);
        finish_animation(&mut app, now);
        assert_eq!(app.discover.deck.len(), 3);
        app.reset_deck();
        assert_eq!(app.discover.deck.len(), 3);
    }

    #[test]
    fn test_card_offset_tracks_drag_then_animation() {
        let mut app = app();
        let now = Instant::now();
        app.begin_drag(100, now);
        let moved = now + Duration::from_millis(200);
        app.update_drag(108, moved);
        assert_eq!(app.discover.card_offset(moved), 80.0);

        app.release_drag(moved);
        // Snap back: position decays toward zero over subsequent ticks.
        app.tick(moved + Duration::from_millis(48));
        let offset = app.discover.card_offset(moved + Duration::from_millis(48));
        assert!(offset < 80.0);
    }

    #[test]
    fn test_fling_fades_card_out() {
        let mut app = app();
        let now = Instant::now();
        drag_and_release(&mut app, 150.0, now);
        let release = now + Duration::from_millis(400);
        assert_eq!(app.discover.card_opacity(release), 1.0);
        assert_eq!(app.discover.card_opacity(release + FLING_DURATION), 0.0);
    }

    #[test]
    fn test_open_match_clears_unread() {
        let mut app = app();
        app.go_to(Screen::Chat);
        assert!(app.matches[0].unread);
        app.open_selected_match();
        assert_eq!(app.chat.view, ChatView::Conversation);
        assert_eq!(app.active_match().unwrap().name, "Priya");
        assert!(!app.matches[0].unread);

        app.close_conversation();
        assert_eq!(app.chat.view, ChatView::MatchList);
        assert!(app.active_match().is_none());
    }

    #[test]
    fn test_match_selection_wraps() {
        let mut app = app();
        app.select_prev_match();
        assert_eq!(app.chat.selected, 2);
        app.select_next_match();
        assert_eq!(app.chat.selected, 0);
        app.select_next_match();
        assert_eq!(app.chat.selected, 1);
    }

    #[test]
    fn test_send_message_appends_from_me() {
        let mut app = app();
        app.chat.input = "See you at Chai Point!".to_string();
        app.send_message();
        assert_eq!(app.chat.messages.len(), 5);
        let last = app.chat.messages.last().unwrap();
        assert!(last.is_from_me());
        assert_eq!(last.text, "See you at Chai Point!");
        assert!(app.chat.input.is_empty());
    }

    #[test]
    fn test_whitespace_message_is_silently_ignored() {
        let mut app = app();
        app.chat.input = "   \t ".to_string();
        app.send_message();
        assert_eq!(app.chat.messages.len(), 4);
    }

    #[test]
    fn test_keyboard_swipe_ignored_during_live_drag() {
        let mut app = app();
        let now = Instant::now();
        let top_id = app.discover.deck.top().unwrap().id;

        app.begin_drag(100, now);
        app.swipe_right(now);
        // The live drag owns the card: no fling may be queued under it.
        assert!(app.discover.animation.is_none());
        assert!(app.discover.drag.is_some());

        // The release alone decides the gesture; a cancel leaves the top
        // card in place instead of revoking a half-applied accept.
        let decision = app.release_drag(now + Duration::from_millis(100));
        assert_eq!(decision, Some(Decision::Cancel));
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.discover.deck.len(), 4);
        assert!(app.discover.deck.is_top(top_id));
    }

    #[test]
    fn test_navigation_drops_live_drag() {
        let mut app = app();
        let now = Instant::now();
        app.go_to(Screen::Discover);
        app.begin_drag(100, now);
        assert!(app.discover.drag.is_some());
        app.go_to(Screen::Chat);
        assert!(app.discover.drag.is_none());
    }
}
