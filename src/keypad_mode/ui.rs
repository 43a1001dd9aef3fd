use super::app::{App, KEYPAD};
use super::helpers::{button_style, wrap_text};
use crate::render_help::render_help;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const MIN_TERMINAL_WIDTH: u16 = 36;
const MIN_TERMINAL_HEIGHT: u16 = 22;

const BUTTON_HEIGHT: u16 = 3;

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            match crossterm::event::read()? {
                Event::Key(KeyEvent { code, modifiers, kind, .. }) if kind == KeyEventKind::Press => {
                    handle_key_event(app, code, modifiers);
                }
                Event::Mouse(event) => {
                    handle_mouse_event(app, event);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        match code {
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::PageDown => app.help_scroll = app.help_scroll.saturating_add(10),
            KeyCode::PageUp => app.help_scroll = app.help_scroll.saturating_sub(10),
            KeyCode::Esc => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('u') | KeyCode::Char('U') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.state.input.clear();
        }
        // every keypad symbol is also a direct key
        KeyCode::Char(c @ ('0'..='9' | '.' | '+' | '-' | '*' | '/')) => {
            app.press(&c.to_string());
        }
        KeyCode::Char('=') => app.press("="),
        KeyCode::Char('c') | KeyCode::Char('C') => app.press("C"),
        KeyCode::Enter => {
            let label = app.focused_label();
            app.press(label);
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.move_focus(-1, 0),
        KeyCode::Down => app.move_focus(1, 0),
        KeyCode::Left => app.move_focus(0, -1),
        KeyCode::Right => app.move_focus(0, 1),
        KeyCode::PageUp => app.history_scroll = app.history_scroll.saturating_sub(3),
        KeyCode::PageDown => app.history_scroll = app.history_scroll.saturating_add(3),
        KeyCode::F(1) => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, event: crossterm::event::MouseEvent) {
    if app.show_help {
        match event.kind {
            MouseEventKind::ScrollDown => app.help_scroll = app.help_scroll.saturating_add(3),
            MouseEventKind::ScrollUp => app.help_scroll = app.help_scroll.saturating_sub(3),
            MouseEventKind::Down(MouseButton::Left) => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
    } else {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.press_at(event.column, event.row);
            }
            MouseEventKind::ScrollDown => {
                app.history_scroll = app.history_scroll.saturating_add(3);
            }
            MouseEventKind::ScrollUp => {
                app.history_scroll = app.history_scroll.saturating_sub(3);
            }
            _ => {}
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let terminal_size = frame.size();

    app.terminal_too_small = terminal_size.width < MIN_TERMINAL_WIDTH
        || terminal_size.height < MIN_TERMINAL_HEIGHT;

    if app.terminal_too_small {
        render_resize_message(frame, terminal_size);
        return;
    }

    let keypad_height = KEYPAD.len() as u16 * BUTTON_HEIGHT + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(4),
            Constraint::Length(keypad_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    render_display(frame, app, layout[0]);
    render_keypad(frame, app, layout[1]);
    render_history(frame, app, layout[2]);
    render_legend(frame, layout[3]);
}

fn render_resize_message(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small! Min size: {}x{}. Current: {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, area.width, area.height
    );

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal window",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Resize Required ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_display(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Display ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_width = inner_area.width.saturating_sub(1) as usize;

    // echo only the tail of a long input, like a hardware display would
    let input_width = app.state.input.width();
    let visible_input: String = if input_width > visible_width {
        let skip = app.state.input.chars().count().saturating_sub(visible_width);
        app.state.input.chars().skip(skip).collect()
    } else {
        app.state.input.clone()
    };

    let lines = vec![
        Line::from(Span::styled(
            visible_input.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            app.state.result.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner_area);

    let cursor_x = inner_area.x + visible_input.width() as u16;
    frame.set_cursor(cursor_x.min(inner_area.right().saturating_sub(1)), inner_area.y);
}

fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Keypad ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.button_areas.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BUTTON_HEIGHT); KEYPAD.len()])
        .split(inner_area);

    for (r, row_labels) in KEYPAD.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(25); row_labels.len()])
            .split(rows[r]);

        for (c, label) in row_labels.iter().enumerate() {
            let focused = r == app.focus_row && c == app.focus_col;
            let mut style = button_style(label);
            if focused {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            let button = Paragraph::new(Line::from(Span::styled(*label, style)))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(if focused {
                            Style::default().fg(Color::Yellow)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        }),
                );

            frame.render_widget(button, cells[c]);
            app.button_areas.push((cells[c], *label));
        }
    }
}

fn render_history(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" History ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.history.is_empty() {
        let empty_msg = Paragraph::new("No calculations yet. Press = to evaluate.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let wrap_width = inner_area.width.saturating_sub(4) as usize;
    let mut items = Vec::new();

    for entry in &app.history {
        let text = format!("{} = {}", entry.input, entry.display);
        let failed = entry.display == "Error";

        for (line_idx, line) in wrap_text(&text, wrap_width).into_iter().enumerate() {
            let prefix = if line_idx == 0 { "> " } else { "  " };
            let style = if failed {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let spans = vec![
                Span::styled(prefix, Style::default().fg(Color::Green)),
                Span::styled(line, style),
            ];
            items.push(ListItem::new(Line::from(spans)));
        }
    }

    if app.scroll_to_bottom {
        app.history_scroll = items.len().saturating_sub(inner_area.height as usize);
        app.scroll_to_bottom = false;
    }
    app.history_scroll = app
        .history_scroll
        .min(items.len().saturating_sub(1));

    let list = List::new(items).block(Block::default());
    let mut state = ListState::default().with_offset(app.history_scroll);
    frame.render_stateful_widget(list, inner_area, &mut state);
}

fn render_legend(frame: &mut Frame, area: Rect) {
    let keys = [
        ("0-9 + - * / .", "Type"),
        ("Arrows/Enter", "Press button"),
        ("=", "Evaluate"),
        ("C", "Clear"),
        ("F1", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
