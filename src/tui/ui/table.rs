use crate::agents::Action;
use crate::cards::Card;
use crate::game::{GameEvent, GameState};
use crate::player::Seat;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

const CARD_WIDTH: u16 = 8;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_height: u16 = 3 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(6),                // computer
            Constraint::Min(6),                // human
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let rules = app.game.rules();
    let header = Paragraph::new(Line::from(format!(
        "Scoring: {}   Opening: {}   Natural: {}   Deck: {}",
        rules.scoring.label(),
        rules.opening.label(),
        if rules.natural_blackjack { "on" } else { "off" },
        app.game.deck_len(),
    )))
    .block(Block::default().title("blackjack").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_seat(f, chunks[1], app, Seat::Computer);
    render_seat(f, chunks[2], app, Seat::Human);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let state = app.game.state();
    let mut left_info = match state {
        GameState::NotStarted => vec![Line::from("Press Space to deal.")],
        GameState::Playing => vec![Line::from(turn_line(app))],
        outcome => vec![Line::from(vec![
            Span::styled(outcome.label(), outcome_style(outcome)),
            Span::raw(" - press Space for a new game."),
        ])],
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(notice) = app.notice() {
        left_info.push(Line::from(Span::styled(notice, Style::default().fg(Color::Cyan))));
    }

    if state == GameState::Playing {
        let human = app.game.human();
        let can_act = app.table.turn() == Seat::Human && !human.is_standing();
        let second_enabled = human.hand().len() == 1 && app.game.computer_hand().len() == 1;
        let action_style = |enabled: bool| {
            if enabled {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            }
        };
        left_info.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("H hit", action_style(can_act)),
            Span::raw(" • "),
            Span::styled("S stand", action_style(can_act)),
            Span::raw(" • "),
            Span::styled("D second card", action_style(second_enabled)),
        ]));
    }

    let right_keys = vec![
        Line::from("W save • O load"),
        Line::from("? help • L history • M menu"),
        Line::from("Q quit"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn turn_line(app: &AppState) -> String {
    if app.table.turn() == Seat::Human && !app.game.human().is_standing() {
        return "Your move.".to_string();
    }
    match app.table.computer_agent().announced() {
        Some(true) => "Computer wants another card...".to_string(),
        Some(false) => "Computer will stand...".to_string(),
        None => "Computer is thinking...".to_string(),
    }
}

fn outcome_style(state: GameState) -> Style {
    match state.winner() {
        Some(Seat::Human) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(Seat::Computer) => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let player = app.game.player(seat);
    let hidden = seat == Seat::Computer && app.computer_hole_hidden();
    let score = if hidden && !player.hand().is_empty() {
        "?".to_string()
    } else {
        player.score(app.game.rules().scoring).to_string()
    };
    let mut title = format!("{} [{score}]", seat.label());
    if player.is_standing() {
        title.push_str(" [Stand]");
    }
    let state = app.game.state();
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if state.is_terminal() {
        let color = match state.winner() {
            Some(w) if w == seat => Color::Green,
            Some(_) => Color::DarkGray,
            None => Color::Yellow,
        };
        block = block.border_style(Style::default().fg(color));
    } else if state == GameState::Playing && app.table.turn() == seat {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    f.render_widget(block, area);

    let seat_inner = inner(area);
    if player.hand().is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "--",
            Style::default().add_modifier(Modifier::DIM),
        )));
        f.render_widget(para, seat_inner);
        return;
    }
    let card_row = Rect { height: seat_inner.height.min(3), ..seat_inner };
    let slots = columns(card_row, player.hand().len(), CARD_WIDTH);
    for (i, (card, slot)) in player.hand().iter().zip(slots).enumerate() {
        let shown = if hidden && i == 0 { None } else { Some(*card) };
        render_card_widget(f, slot, shown, None);
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        let reveal = app.game.state().is_terminal();
        for entry in entries {
            lines.push(Line::from(history_line(&entry, reveal)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn history_line(entry: &GameEvent, reveal: bool) -> String {
    let who = entry.seat.map(Seat::label).unwrap_or("Table");
    // The computer's deals stay hidden until the game is decided.
    let card = match entry.card {
        Some(_) if !reveal && entry.seat == Some(Seat::Computer) => " [??]".to_string(),
        Some(c) => format!(" {c}"),
        None => String::new(),
    };
    format!("{who} {}{card}", entry.verb.label())
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / new game"),
        Line::from(format!("- H: {}", action_help(Action::Hit))),
        Line::from(format!("- S: {}", action_help(Action::Stand))),
        Line::from("- D: deal the second opening card to both sides"),
        Line::from("- W: save game"),
        Line::from("- O: load saved game"),
        Line::from("- L: history"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q: quit"),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn action_help(action: Action) -> &'static str {
    match action {
        Action::Hit => "hit (take a card)",
        Action::Stand => "stand (the computer then plays out its hand)",
    }
}

fn suit_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), suit_style(c))),
        None => Line::from(Span::styled("[??]", Style::default().add_modifier(Modifier::DIM))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
