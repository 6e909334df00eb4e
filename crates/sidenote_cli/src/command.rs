//! Interactive command language.
//!
//! One input line maps to one `Command`. Arguments run to the end of the
//! line; `\n` inside `content` text becomes a line break.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  new               start a new note
  open <n>          show note number <n> from the list
  search [text]     filter the list (no text clears the filter)
  edit              edit the shown note
  title <text>      set the draft title
  content <text>    set the draft content (\\n for line breaks)
  save              save the draft
  cancel            drop the draft
  delete            delete the note being edited
  help              show this help
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    /// 1-based position in the visible list.
    Open(usize),
    Search(String),
    Edit,
    Title(String),
    Content(String),
    Save,
    Cancel,
    Delete,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidIndex(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "type a command, or `help`"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::InvalidIndex(raw) => write!(f, "`{raw}` is not a list number"),
        }
    }
}

impl Error for ParseError {}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "new" | "n" => Ok(Self::New),
            "open" | "o" => {
                let raw = rest.trim();
                if raw.is_empty() {
                    return Err(ParseError::MissingArgument("open"));
                }
                match raw.parse::<usize>() {
                    Ok(index) if index > 0 => Ok(Self::Open(index)),
                    _ => Err(ParseError::InvalidIndex(raw.to_string())),
                }
            }
            "search" | "/" => Ok(Self::Search(rest.to_string())),
            "edit" | "e" => Ok(Self::Edit),
            "title" => {
                let text = rest.trim();
                if text.is_empty() {
                    return Err(ParseError::MissingArgument("title"));
                }
                Ok(Self::Title(text.to_string()))
            }
            "content" => {
                if rest.trim().is_empty() {
                    return Err(ParseError::MissingArgument("content"));
                }
                Ok(Self::Content(rest.replace("\\n", "\n")))
            }
            "save" | "s" => Ok(Self::Save),
            "cancel" | "c" => Ok(Self::Cancel),
            "delete" | "rm" => Ok(Self::Delete),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, ParseError};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("open 2"), Ok(Command::Open(2)));
        assert_eq!(
            Command::parse("title  Weekly plan \n"),
            Ok(Command::Title("Weekly plan".to_string()))
        );
        assert_eq!(
            Command::parse("content one\\ntwo"),
            Ok(Command::Content("one\ntwo".to_string()))
        );
        assert_eq!(Command::parse("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn search_keeps_raw_text_and_allows_clearing() {
        assert_eq!(
            Command::parse("search Tax "),
            Ok(Command::Search("Tax ".to_string()))
        );
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(Command::parse("open 0"), Err(ParseError::InvalidIndex("0".into())));
        assert_eq!(Command::parse("open"), Err(ParseError::MissingArgument("open")));
        assert_eq!(Command::parse("title"), Err(ParseError::MissingArgument("title")));
        assert!(matches!(Command::parse("frobnicate"), Err(ParseError::Unknown(_))));
    }
}
