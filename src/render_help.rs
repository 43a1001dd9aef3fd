use crate::keypad_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" PadCalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let section = |s: &str| {
        Line::from(Span::styled(
            s.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "PadCalc - Keypad Calculator for the Terminal",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Keypad:"),
        Line::from("  Click a button with the mouse, or move the"),
        Line::from("  focus with the arrow keys and press Enter."),
        Line::from("  Every symbol also works as a direct key."),
        Line::from(""),
        section("Buttons:"),
        Line::from("  0-9 : Append a digit to the expression"),
        Line::from("  + - * / : Append an operator"),
        Line::from("  =   : Evaluate the expression"),
        Line::from("  C   : Clear display and history"),
        Line::from(""),
        section("Evaluation:"),
        Line::from("  Operators apply strictly left to right,"),
        Line::from("  with no precedence: 3+2*2 gives 10.0"),
        Line::from("  (3+2 first, then *2)."),
        Line::from("  Division by zero shows Infinity."),
        Line::from("  Anything unreadable shows Error."),
        Line::from(""),
        section("Keys:"),
        Line::from("  .         : Decimal point (keyboard only)"),
        Line::from("  Backspace : Delete the last symbol"),
        Line::from("  Ctrl+U    : Clear the input line"),
        Line::from("  PgUp/PgDn : Scroll the history pane"),
        Line::from("  Mouse wheel : Scroll the history pane"),
        Line::from("  F1        : Show this help screen"),
        Line::from("  Esc / q   : Quit"),
        Line::from(""),
        section("Examples:"),
        Line::from("  7+8    = 15.0"),
        Line::from("  10/2   = 5.0"),
        Line::from("  3+2*2  = 10.0"),
        Line::from("  5/0    = Infinity"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
