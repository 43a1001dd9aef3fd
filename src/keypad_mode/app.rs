use crate::calc_engine::evaluate_expression;
use ratatui::layout::Rect;

/// The button surface, row-major. Same 4x4 arrangement as the keypad
/// hardware layout this mimics; note there is no '.' button, the decimal
/// point is keyboard-only.
pub const KEYPAD: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "+"],
];

/// The two pieces of display state. Owned by the App and passed around
/// explicitly; the evaluator itself keeps nothing between calls.
pub struct CalcState {
    pub input: String,
    pub result: String,
}

impl CalcState {
    pub fn new() -> Self {
        CalcState {
            input: String::new(),
            result: String::new(),
        }
    }

    pub fn append(&mut self, symbol: &str) {
        self.input.push_str(symbol);
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
    }

    pub fn evaluate(&mut self) {
        self.result = evaluate_expression(&self.input);
    }
}

pub struct HistoryEntry {
    pub input: String,
    pub display: String,
}

pub struct App {
    pub state: CalcState,
    pub focus_row: usize,
    pub focus_col: usize,
    pub history: Vec<HistoryEntry>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub button_areas: Vec<(Rect, &'static str)>,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            state: CalcState::new(),
            focus_row: 0,
            focus_col: 0,
            history: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            button_areas: Vec::new(),
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            terminal_too_small: false,
        }
    }

    pub fn focused_label(&self) -> &'static str {
        KEYPAD[self.focus_row][self.focus_col]
    }

    pub fn move_focus(&mut self, d_row: i32, d_col: i32) {
        let rows = KEYPAD.len() as i32;
        let cols = KEYPAD[0].len() as i32;
        self.focus_row = (self.focus_row as i32 + d_row).rem_euclid(rows) as usize;
        self.focus_col = (self.focus_col as i32 + d_col).rem_euclid(cols) as usize;
    }

    /// Routes one button press, whatever the source (focused Enter, direct
    /// key, or mouse click on the button's area).
    pub fn press(&mut self, label: &str) {
        match label {
            "=" => self.submit(),
            "C" => {
                self.state.clear();
                self.history.clear();
                self.history_scroll = 0;
            }
            _ => self.state.append(label),
        }
    }

    fn submit(&mut self) {
        self.state.evaluate();
        if !self.state.input.is_empty() {
            self.history.push(HistoryEntry {
                input: self.state.input.clone(),
                display: self.state.result.clone(),
            });
            self.scroll_to_bottom = true;
        }
    }

    /// Mouse press at terminal coordinates; hit-boxes are refreshed by the
    /// renderer on every draw.
    pub fn press_at(&mut self, column: u16, row: u16) {
        let hit = self
            .button_areas
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, label)| *label);
        if let Some(label) = hit {
            self.press(label);
        }
    }

    pub fn backspace(&mut self) {
        self.state.input.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_concatenates_symbols() {
        let mut state = CalcState::new();
        state.append("1");
        state.append("2");
        state.append("+");
        state.append("3");
        assert_eq!(state.input, "12+3");
    }

    #[test]
    fn evaluate_sets_result_text() {
        let mut state = CalcState::new();
        state.input = "7+8".to_string();
        state.evaluate();
        assert_eq!(state.result, "15.0");
    }

    #[test]
    fn evaluate_failure_shows_error_literal() {
        let mut state = CalcState::new();
        state.input = "3..4".to_string();
        state.evaluate();
        assert_eq!(state.result, "Error");
    }

    #[test]
    fn clear_resets_both_texts() {
        let mut state = CalcState::new();
        state.input = "1+1".to_string();
        state.evaluate();
        state.clear();
        assert_eq!(state.input, "");
        assert_eq!(state.result, "");
    }

    #[test]
    fn press_dispatches_on_label() {
        let mut app = App::new();
        app.press("3");
        app.press("+");
        app.press("2");
        app.press("*");
        app.press("2");
        app.press("=");
        assert_eq!(app.state.result, "10.0");
        assert_eq!(app.history.len(), 1);

        app.press("C");
        assert_eq!(app.state.input, "");
        assert_eq!(app.state.result, "");
        assert!(app.history.is_empty());
    }

    #[test]
    fn equals_on_empty_input_shows_error_without_history() {
        let mut app = App::new();
        app.press("=");
        assert_eq!(app.state.result, "Error");
        assert!(app.history.is_empty());
    }

    #[test]
    fn focus_wraps_around_the_grid() {
        let mut app = App::new();
        assert_eq!(app.focused_label(), "7");
        app.move_focus(-1, 0);
        assert_eq!(app.focused_label(), "0");
        app.move_focus(0, -1);
        assert_eq!(app.focused_label(), "+");
    }

    #[test]
    fn press_at_uses_rendered_hit_boxes() {
        let mut app = App::new();
        app.button_areas = vec![
            (Rect::new(0, 0, 5, 3), "7"),
            (Rect::new(5, 0, 5, 3), "8"),
        ];
        app.press_at(6, 1);
        app.press_at(1, 2);
        assert_eq!(app.state.input, "87");
        app.press_at(40, 40); // outside every button
        assert_eq!(app.state.input, "87");
    }
}
