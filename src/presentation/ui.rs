use crate::application::{App, ChatView, Gender, OnboardingField, Screen, PX_PER_CELL};
use crate::domain::SwipeClassifier;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const ACCENT: Color = Color::Magenta;

pub fn render_ui(f: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.screen {
        Screen::Welcome => render_welcome(f, app, chunks[1]),
        Screen::Login => render_login(f, app, chunks[1]),
        Screen::Onboarding => render_onboarding(f, app, chunks[1]),
        Screen::Discover => render_discover(f, app, chunks[1], now),
        Screen::Chat => render_chat(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let label = match app.screen {
        Screen::Welcome => "",
        Screen::Login => " | Sign In",
        Screen::Onboarding => " | Profile Setup",
        Screen::Discover => " | Discover",
        Screen::Chat => " | Matches",
    };
    let header = Paragraph::new(format!("Dil Mil{}", label))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_welcome(f: &mut Frame, app: &App, area: Rect) {
    let button = |label: &str, selected: bool| {
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    use crate::application::WelcomeAction::*;
    let lines = vec![
        Line::from(Span::styled(
            "Dil Mil",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Where Desi hearts connect.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            button("Find Your Match", app.welcome_action == FindYourMatch),
            Span::raw("   "),
            button("Sign In", app.welcome_action == SignIn),
        ]),
    ];

    let target = centered_rect(44, 6, area);
    let welcome = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(welcome, target);
}

fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let target = centered_rect(46, 9, area);
    let button_label = if app.login.is_sending() {
        "Sending Code..."
    } else {
        "Continue"
    };
    let lines = vec![
        Line::from("Enter your phone number to sign in"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Phone: "),
            Span::styled(
                if app.login.phone_input.is_empty() {
                    "+1 (555) 000-0000".to_string()
                } else {
                    app.login.phone_input.clone()
                },
                if app.login.phone_input.is_empty() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                },
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", button_label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Welcome Back")
                .title_alignment(Alignment::Center),
        );
    f.render_widget(card, target);
}

fn render_onboarding(f: &mut Frame, app: &App, area: Rect) {
    let target = centered_rect(52, 16, area);
    let ob = &app.onboarding;

    let mut dots: Vec<Span> = Vec::new();
    for i in 1..=3u8 {
        let style = if ob.step >= i {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        dots.push(Span::styled("━━━━━━", style));
        if i < 3 {
            dots.push(Span::raw(" "));
        }
    }

    let (title, description) = match ob.step {
        1 => ("About You", "Let's start with the basics"),
        2 => ("Your Vibe", "Tell us a bit about yourself"),
        _ => ("Show Yourself", "Add your best photos"),
    };

    let mut lines = vec![
        Line::from(dots).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            description,
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    match ob.step {
        1 => {
            lines.push(field_line("First Name", &ob.name, "Enter your name", ob.focus == OnboardingField::Name));
            lines.push(field_line("Age", &ob.age, "25", ob.focus == OnboardingField::Age));
            lines.push(gender_line(ob.gender, ob.focus == OnboardingField::Gender));
        }
        2 => {
            lines.push(field_line(
                "Bio",
                &ob.bio,
                "I love chai, bollywood movies, and...",
                ob.focus == OnboardingField::Bio,
            ));
        }
        _ => {
            lines.push(Line::from("  [ + Add Photo ]   [ + Add Photo ]"));
            lines.push(Line::from(""));
            lines.push(Line::from("  [ + Add Photo ]   [ + Add Photo ]"));
        }
    }

    lines.push(Line::from(""));
    let next = if ob.step < 3 { "Next" } else { "Complete Setup" };
    lines.push(
        Line::from(Span::styled(
            format!("[ {} ]", next),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        );
    f.render_widget(card, target);
}

fn field_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let (text, text_style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (value.to_string(), Style::default())
    };
    Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(text, text_style),
    ])
}

fn gender_line(selected: Option<Gender>, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::raw(marker.to_string()),
        Span::styled("Gender: ", label_style),
    ];
    for option in Gender::ALL {
        let style = if selected == Some(option) {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_discover(f: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let width = 36.min(area.width.saturating_sub(4)).max(20);
    let height = 16.min(area.height.saturating_sub(2)).max(10);
    let base = centered_rect(width, height, area);
    app.discover.card_area = Some((base.x, base.y, base.width, base.height));

    if app.discover.deck.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "No more profiles",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Check back later for more matches!",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ r: Reset Demo ]",
                Style::default().fg(ACCENT),
            )),
        ];
        let empty = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(empty, centered_rect(40, 4, area));
        return;
    }

    // Card beneath the top one renders dimmed and never takes input.
    let cards = app.discover.deck.cards();
    if cards.len() >= 2 {
        let under = &cards[cards.len() - 2];
        let dim = Style::default().fg(Color::DarkGray);
        let block = Block::default().borders(Borders::ALL).style(dim);
        let body = Paragraph::new(Line::from(Span::styled(
            format!("{}, {}", under.name, under.age),
            dim,
        )))
        .block(block);
        f.render_widget(body, base);
    }

    let offset = app.discover.card_offset(now);
    let opacity = app.discover.card_opacity(now);
    let rect = shifted_rect(base, area, offset);
    render_top_card(f, app, rect, offset, opacity);
}

fn render_top_card(f: &mut Frame, app: &App, rect: Rect, offset: f32, opacity: f32) {
    let Some(profile) = app.discover.deck.top() else {
        return;
    };

    let fade = fade_color(opacity);
    let inner_width = rect.width.saturating_sub(2) as usize;

    let mut lines = vec![indicator_line(offset, inner_width)];
    lines.push(Line::from(""));

    // A right drag tilts the card clockwise; nudge the headline the same way.
    let rotation = SwipeClassifier::card_rotation(offset);
    let indent = ((rotation / 25.0) * 4.0).round() as i32;
    let pad = " ".repeat(indent.unsigned_abs() as usize);
    let headline = if indent >= 0 {
        format!("{}{}, {}", pad, profile.name, profile.age)
    } else {
        format!("{}, {}{}", profile.name, profile.age, pad)
    };
    lines.push(Line::from(Span::styled(
        headline,
        Style::default().fg(fade).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        profile.location.clone(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        profile.bio.clone(),
        Style::default().fg(fade),
    )));
    lines.push(Line::from(""));
    let tags = profile
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::from(Span::styled(
        tags,
        Style::default().fg(ACCENT),
    )));

    f.render_widget(Clear, rect);
    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fade)),
        );
    f.render_widget(card, rect);
}

fn indicator_line(offset: f32, inner_width: usize) -> Line<'static> {
    let like = SwipeClassifier::like_opacity(offset);
    let nope = SwipeClassifier::nope_opacity(offset);

    let like_span = if like > 0.0 {
        Span::styled(
            "LIKE",
            Style::default()
                .fg(Color::Rgb(0, 60 + (like * 195.0) as u8, 0))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("    ")
    };
    let nope_span = if nope > 0.0 {
        Span::styled(
            "NOPE",
            Style::default()
                .fg(Color::Rgb(60 + (nope * 195.0) as u8, 0, 0))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("    ")
    };
    let filler = " ".repeat(inner_width.saturating_sub(8));
    Line::from(vec![like_span, Span::raw(filler), nope_span])
}

fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    match app.chat.view {
        ChatView::MatchList => render_match_list(f, app, area),
        ChatView::Conversation => render_conversation(f, app, area),
    }
}

fn render_match_list(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "NEW MATCHES",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(
            app.matches
                .iter()
                .map(|m| {
                    let dot = if m.unread { "● " } else { "  " };
                    Span::styled(
                        format!(" {}{} ", dot, m.name),
                        Style::default().fg(ACCENT),
                    )
                })
                .collect::<Vec<_>>(),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "MESSAGES",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
    ];

    for (i, entry) in app.matches.iter().enumerate() {
        let selected = i == app.chat.selected;
        let row_style = if selected {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else if entry.unread {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let dot = if entry.unread { "●" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(
                " {} {:<8} {:<44} {}",
                dot, entry.name, entry.last_message, entry.timestamp
            ),
            row_style,
        )));
    }

    let list = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title("Matches"),
    );
    f.render_widget(list, area);
}

fn render_conversation(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let name = app
        .active_match()
        .map(|m| m.name.clone())
        .unwrap_or_default();

    let mut lines = Vec::new();
    for msg in &app.chat.messages {
        let (alignment, style) = if msg.is_from_me() {
            (
                Alignment::Right,
                Style::default().fg(Color::Black).bg(ACCENT),
            )
        } else {
            (Alignment::Left, Style::default().bg(Color::DarkGray))
        };
        lines.push(
            Line::from(Span::styled(format!(" {} ", msg.text), style)).alignment(alignment),
        );
        lines.push(
            Line::from(Span::styled(
                msg.timestamp.clone(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(alignment),
        );
    }

    let history = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (Online)", name)),
        );
    f.render_widget(history, chunks[0]);

    let input = Paragraph::new(app.chat.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Type a message..."),
    );
    f.render_widget(input, chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.screen {
        Screen::Welcome => {
            "←/→/Tab: choose | Enter: select | q: quit".to_string()
        }
        Screen::Login => {
            if app.login.is_sending() {
                "Sending Code...".to_string()
            } else {
                "Type your number | Enter: continue | Esc: back".to_string()
            }
        }
        Screen::Onboarding => format!(
            "Step {}/3 | Tab: next field | Enter: {} | Esc: back",
            app.onboarding.step,
            if app.onboarding.step < 3 { "next" } else { "complete setup" },
        ),
        Screen::Discover => {
            if app.discover.deck.is_empty() {
                "r: reset demo | p: profile | m: matches".to_string()
            } else {
                format!(
                    "{} left | drag card or ←: nope / →: like | p: profile | m: matches",
                    app.discover.deck.len()
                )
            }
        }
        Screen::Chat => match app.chat.view {
            ChatView::MatchList => {
                "↑↓: select | Enter: open | Esc: back to discover".to_string()
            }
            ChatView::Conversation => {
                "Type a message | Enter: send | Esc: back to matches".to_string()
            }
        },
    };

    let style = match app.screen {
        Screen::Welcome => Style::default(),
        Screen::Login => Style::default().fg(Color::Yellow),
        Screen::Onboarding => Style::default().fg(Color::Cyan),
        Screen::Discover => Style::default().fg(Color::Green),
        Screen::Chat => Style::default().fg(ACCENT),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

/// Rect of the given size centered within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// The base card rect shifted horizontally by the live offset, clamped to
/// the body area so a mid-fling card slides to the edge while it fades.
fn shifted_rect(base: Rect, area: Rect, offset_px: f32) -> Rect {
    let shift = (offset_px / PX_PER_CELL).round() as i32;
    let min_x = area.x as i32;
    let max_x = (area.x + area.width).saturating_sub(base.width) as i32;
    let x = (base.x as i32 + shift).clamp(min_x, max_x.max(min_x));
    Rect {
        x: x as u16,
        ..base
    }
}

/// Text/border color for a fading card; full opacity renders white.
fn fade_color(opacity: f32) -> Color {
    let v = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb(v, v, v)
}
