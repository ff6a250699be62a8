//! rHabits main entrypoint.

use rhabits::run;
use rhabits::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
