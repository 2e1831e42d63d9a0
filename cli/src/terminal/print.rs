use colored::*;
use homenet_core::graph::BuildStats;
use tracing::info;

use super::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

pub fn aligned_line(key: &str, value: impl std::fmt::Display) {
    let dots: String = ".".repeat(12usize.saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.bright_green(),
        dots.bright_black(),
        ":".bright_black(),
        value
    ));
}

pub fn summary(stats: &BuildStats, quiet: u8) {
    if quiet > 0 {
        return;
    }

    header("log summary", quiet);
    aligned_line("Lines", stats.lines);
    aligned_line("Headers", stats.headers);
    aligned_line("Malformed", stats.malformed);
    aligned_line("External", stats.external);
    aligned_line("Internal", stats.internal);
    aligned_line("Edges", stats.edges.to_string().bold());
}
