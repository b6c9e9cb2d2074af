//! CLI command messaging
//!
//! Consistent tagged output for one-shot commands such as `set-api`, `reset`
//! and failed requests.

const YELLOW: &str = "\x1b[1;33m";
const LIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Format `[TAG] title`, followed by tab-separated details when present.
fn tagged_line(color: &str, tag: &str, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]{} {}", color, tag, RESET, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(YELLOW, "INFO", title, details));
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    println!("{}", tagged_line(LIGHT_RED, "WARN", title, details));
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{}", tagged_line(RED, "ERROR", title, ""));
    if let Some(details) = details {
        println!("{}", tagged_line(RED, "ERROR", "Details:", details));
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(GREEN, "SUCCESS", title, details));
}

/// Macro for print_cmd_info! usage
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for print_cmd_warn! usage
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
