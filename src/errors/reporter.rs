use colored::Colorize;

use crate::SourceUnit;

use super::errors::{Error, ErrorTip};

/// Controls whether diagnostics are colorized. `Auto` defers to the
/// terminal detection (and `NO_COLOR`) of the `colored` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    Auto,
    Always,
    Never,
}

pub fn apply_color_policy(policy: ColorPolicy) {
    match policy {
        ColorPolicy::Auto => {}
        ColorPolicy::Always => colored::control::set_override(true),
        ColorPolicy::Never => colored::control::set_override(false),
    }
}

/// Renders a diagnostic against its source unit:
///
/// ```text
/// error: invalid token: ';'
/// -> demo.fl:2:13
///    |
///  2 | let a = #;
///    | ------------^
///    = `;` cannot appear here, did you miss a semicolon?
/// ```
pub fn format_error(error: &Error, unit: &SourceUnit) -> String {
    let position = error.get_position();

    let line_text = unit.line_text(position.line);
    let trimmed = line_text.trim_start();
    let removed_whitespace = line_text.len() - trimmed.len();

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;
    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", "error".red().bold(), error.message()));
    out.push_str(&format!(
        "-> {}:{}:{}\n",
        unit.path, position.line, position.column
    ));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, trimmed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!("{:>padding$} {}\n", "=", tip));
    }

    out
}

pub fn report(error: &Error, unit: &SourceUnit, policy: ColorPolicy) {
    apply_color_policy(policy);
    eprint!("{}", format_error(error, unit));
}
