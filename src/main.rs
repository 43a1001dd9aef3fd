mod calc_engine;
#[cfg(feature = "tui")]
mod keypad_mode;
#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;

use anyhow::Result;

#[cfg(feature = "tui")]
fn main() -> Result<()> {
    keypad_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn main() -> Result<()> {
    line_mode::run_line()
}

#[cfg(all(not(feature = "tui"), not(feature = "line")))]
fn main() -> Result<()> {
    // built without a UI; the engine is still reachable from tests
    println!("padcalc was built without the 'tui' or 'line' feature");
    Ok(())
}
