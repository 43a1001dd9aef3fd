#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(String),
    Op(char),
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Splits the raw buffer into number literals and operator symbols.
///
/// Total over any input: characters that are neither digits, dots nor
/// operators are dropped without flushing the literal buffer, so "3x4"
/// scans as the single literal "34". Malformed literals like "3..4" are
/// emitted as-is and fail numeric parsing in the reducer.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c.is_ascii_digit() || c == '.' {
            current.push(c);
        } else if is_operator(c) {
            if !current.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut current)));
            }
            tokens.push(Token::Op(c));
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Literal(current));
    }

    tokens
}

fn apply(op: char, left: f64, right: f64) -> f64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        // IEEE semantics: x/0 gives an infinity, 0/0 gives NaN
        '/' => left / right,
        _ => right,
    }
}

/// Folds the token stream left to right, ignoring operator precedence.
///
/// An operator token becomes the pending operator, overwriting one that was
/// never applied ("3+-2" subtracts). A literal with no pending operator is
/// pushed as the accumulated value; with a pending operator it is combined
/// with the popped value, except when nothing was accumulated yet (leading
/// operator), in which case the operator is discarded and the value pushed.
pub fn reduce(tokens: &[Token]) -> Result<f64, String> {
    let mut stack: Vec<f64> = Vec::new();
    let mut pending: Option<char> = None;

    for token in tokens {
        match token {
            Token::Op(c) => pending = Some(*c),
            Token::Literal(text) => {
                let number: f64 = text
                    .parse()
                    .map_err(|_| format!("invalid number: '{}'", text))?;
                match pending.take() {
                    Some(op) => match stack.pop() {
                        Some(left) => stack.push(apply(op, left, number)),
                        None => stack.push(number),
                    },
                    None => stack.push(number),
                }
            }
        }
    }

    stack.pop().ok_or_else(|| "empty expression".to_string())
}

/// Default decimal rendering of the result. The accumulator is always f64,
/// so whole numbers keep a trailing ".0".
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// The single entry point the UI calls: raw buffer in, display string out.
/// Every failure collapses to the literal "Error"; callers never see a
/// structured error.
pub fn evaluate_expression(input: &str) -> String {
    match reduce(&tokenize(input)) {
        Ok(value) => format_value(value),
        Err(_) => "Error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_literals_and_operators() {
        assert_eq!(
            tokenize("12+3.5"),
            vec![
                Token::Literal("12".to_string()),
                Token::Op('+'),
                Token::Literal("3.5".to_string()),
            ]
        );
    }

    #[test]
    fn tokenizer_is_total_over_garbage() {
        assert_eq!(tokenize("?! ="), Vec::<Token>::new());
        // foreign characters are dropped without flushing the literal
        assert_eq!(tokenize("3x4"), vec![Token::Literal("34".to_string())]);
    }

    #[test]
    fn tokenizer_passes_malformed_literals_through() {
        assert_eq!(tokenize("3..4"), vec![Token::Literal("3..4".to_string())]);
    }

    #[test]
    fn tokenizer_keeps_consecutive_operators() {
        assert_eq!(
            tokenize("3+-2"),
            vec![
                Token::Literal("3".to_string()),
                Token::Op('+'),
                Token::Op('-'),
                Token::Literal("2".to_string()),
            ]
        );
    }

    #[test]
    fn evaluates_left_to_right_without_precedence() {
        // (3+2)=5, then 5*2=10
        assert_eq!(evaluate_expression("3+2*2"), "10.0");
        assert_eq!(evaluate_expression("10/2"), "5.0");
        assert_eq!(evaluate_expression("7+8"), "15.0");
        assert_eq!(evaluate_expression("100-10*2/4"), "45.0");
    }

    #[test]
    fn leading_operator_is_discarded() {
        assert_eq!(evaluate_expression("+5"), "5.0");
        assert_eq!(evaluate_expression("-5"), "5.0");
    }

    #[test]
    fn later_operator_overwrites_pending() {
        assert_eq!(evaluate_expression("3+-2"), "1.0");
        assert_eq!(evaluate_expression("3-+2"), "5.0");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(evaluate_expression(""), "Error");
        assert_eq!(evaluate_expression("+*"), "Error");
    }

    #[test]
    fn malformed_literal_is_an_error() {
        assert_eq!(evaluate_expression("3..4"), "Error");
        assert_eq!(evaluate_expression("3.4.5"), "Error");
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(evaluate_expression("5/0"), "Infinity");
        assert_eq!(evaluate_expression("0-5/0"), "-Infinity");
        assert_eq!(evaluate_expression("0/0"), "NaN");
    }

    #[test]
    fn fractional_results_use_default_rendering() {
        assert_eq!(evaluate_expression("5/2"), "2.5");
        assert_eq!(evaluate_expression("1/3"), (1.0f64 / 3.0).to_string());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let first = evaluate_expression("9*9-1");
        let second = evaluate_expression("9*9-1");
        assert_eq!(first, "80.0");
        assert_eq!(first, second);
    }
}
