use crate::application::{App, ChatView, OnboardingField, Screen};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    /// Routes a key press to the handler for the current screen. `now` is
    /// the wall-clock instant of the event; timing-sensitive actions (login
    /// submit, swipes) receive it so state stays deterministic under test.
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers, now: Instant) {
        match app.screen {
            Screen::Welcome => Self::handle_welcome(app, key),
            Screen::Login => Self::handle_login(app, key, now),
            Screen::Onboarding => Self::handle_onboarding(app, key),
            Screen::Discover => Self::handle_discover(app, key, now),
            Screen::Chat => Self::handle_chat(app, key),
        }
    }

    /// Routes mouse input. Only the discovery deck listens to the pointer,
    /// and only over the top card's rectangle.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
        if app.screen != Screen::Discover {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if Self::hits_card(app, mouse.column, mouse.row) {
                    app.begin_drag(mouse.column, now);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                app.update_drag(mouse.column, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                app.release_drag(now);
            }
            _ => {}
        }
    }

    fn hits_card(app: &App, column: u16, row: u16) -> bool {
        let Some((x, y, w, h)) = app.discover.card_area else {
            return false;
        };
        column >= x && column < x + w && row >= y && row < y + h
    }

    fn handle_welcome(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                app.toggle_welcome_action();
            }
            KeyCode::Enter => {
                app.activate_welcome_action();
            }
            KeyCode::Char('1') => {
                app.go_to(Screen::Onboarding);
            }
            KeyCode::Char('2') => {
                app.go_to(Screen::Login);
            }
            _ => {}
        }
    }

    fn handle_login(app: &mut App, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Enter => {
                app.submit_login(now);
            }
            KeyCode::Esc => {
                app.go_to(Screen::Welcome);
            }
            _ => {
                if !app.login.is_sending() {
                    let login = &mut app.login;
                    Self::edit_text(&mut login.phone_input, &mut login.cursor_position, key);
                }
            }
        }
    }

    fn handle_onboarding(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.onboarding_advance();
                return;
            }
            KeyCode::Esc => {
                app.onboarding_back();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                app.onboarding_focus_next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.onboarding_focus_prev();
                return;
            }
            _ => {}
        }

        match app.onboarding.focus {
            OnboardingField::Gender => match key {
                KeyCode::Left => app.cycle_gender(false),
                KeyCode::Right => app.cycle_gender(true),
                _ => {}
            },
            OnboardingField::Age => {
                // The age field accepts digits only.
                if matches!(key, KeyCode::Char(c) if !c.is_ascii_digit()) {
                    return;
                }
                let ob = &mut app.onboarding;
                Self::edit_text(&mut ob.age, &mut ob.cursor_position, key);
            }
            OnboardingField::Name => {
                let ob = &mut app.onboarding;
                Self::edit_text(&mut ob.name, &mut ob.cursor_position, key);
            }
            OnboardingField::Bio => {
                let ob = &mut app.onboarding;
                Self::edit_text(&mut ob.bio, &mut ob.cursor_position, key);
            }
            OnboardingField::Photos => {}
        }
    }

    fn handle_discover(app: &mut App, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Left => {
                app.swipe_left(now);
            }
            KeyCode::Right => {
                app.swipe_right(now);
            }
            KeyCode::Char('r') => {
                app.reset_deck();
            }
            KeyCode::Char('p') => {
                app.go_to(Screen::Onboarding);
            }
            KeyCode::Char('m') => {
                app.go_to(Screen::Chat);
            }
            _ => {}
        }
    }

    fn handle_chat(app: &mut App, key: KeyCode) {
        match app.chat.view {
            ChatView::MatchList => match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_match(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_match(),
                KeyCode::Enter => app.open_selected_match(),
                KeyCode::Esc => app.go_to(Screen::Discover),
                _ => {}
            },
            ChatView::Conversation => match key {
                KeyCode::Enter => app.send_message(),
                KeyCode::Esc => app.close_conversation(),
                _ => {
                    let chat = &mut app.chat;
                    Self::edit_text(&mut chat.input, &mut chat.cursor_position, key);
                }
            },
        }
    }

    /// Shared single-line text editing used by the phone, onboarding, and
    /// chat inputs. The cursor counts characters, not bytes, so multi-byte
    /// input never lands `insert`/`remove` off a char boundary.
    fn edit_text(input: &mut String, cursor: &mut usize, key: KeyCode) {
        let char_count = input.chars().count();
        match key {
            KeyCode::Backspace => {
                if *cursor > 0 {
                    input.remove(Self::byte_index(input, *cursor - 1));
                    *cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if *cursor < char_count {
                    input.remove(Self::byte_index(input, *cursor));
                }
            }
            KeyCode::Left => {
                if *cursor > 0 {
                    *cursor -= 1;
                }
            }
            KeyCode::Right => {
                if *cursor < char_count {
                    *cursor += 1;
                }
            }
            KeyCode::Home => {
                *cursor = 0;
            }
            KeyCode::End => {
                *cursor = char_count;
            }
            KeyCode::Char(c) => {
                input.insert(Self::byte_index(input, *cursor), c);
                *cursor += 1;
            }
            _ => {}
        }
    }

    /// Byte offset of the character at `char_pos`, or the end of the string
    /// when the cursor sits past the last character.
    fn byte_index(input: &str, char_pos: usize) -> usize {
        input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(input.len())
    }
}
