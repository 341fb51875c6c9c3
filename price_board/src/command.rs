//! Commands typed on stdin while the board is running.
//!
//! An empty line or `r` requests an immediate refresh; `q` stops the board.
use strum::ParseError;
use strum_macros::EnumString;

/// User command read from one stdin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BoardCommand {
    /// Refresh prices now.
    #[strum(serialize = "r", serialize = "refresh")]
    Refresh,
    /// Stop the board.
    #[strum(serialize = "q", serialize = "quit", serialize = "exit")]
    Quit,
}

impl BoardCommand {
    /// Parses a raw stdin line; blank lines mean `Refresh`.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(BoardCommand::Refresh);
        }
        trimmed.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(BoardCommand::parse_line("\n"), Ok(BoardCommand::Refresh));
        assert_eq!(BoardCommand::parse_line("R"), Ok(BoardCommand::Refresh));
        assert_eq!(BoardCommand::parse_line(" refresh "), Ok(BoardCommand::Refresh));
        assert_eq!(BoardCommand::parse_line("q"), Ok(BoardCommand::Quit));
        assert_eq!(BoardCommand::parse_line("EXIT"), Ok(BoardCommand::Quit));
        assert!(BoardCommand::parse_line("buy gold").is_err());
    }
}
