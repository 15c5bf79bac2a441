#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    History,
    Analysis,
}

impl FetchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchKind::History => "history",
            FetchKind::Analysis => "analysis",
        }
    }
}

/// Commands parsed from interactive input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Select(String),
    Clear,
    Quit,
}

/// An empty line or q quits; "clear" drops the selection; anything else is
/// taken as a ticker (upper-cased for display, the service matches
/// case-insensitively anyway).
pub fn parse_command(line: &str) -> UiCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        UiCommand::Quit
    } else if trimmed.eq_ignore_ascii_case("clear") {
        UiCommand::Clear
    } else {
        UiCommand::Select(trimmed.to_uppercase())
    }
}
