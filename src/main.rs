//! worklog main entrypoint.

use worklog::run;
use worklog::ui::messages::error;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
