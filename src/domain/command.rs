//! Bot commands recognised by the dispatcher.

use std::fmt;

/// Command parsed from the leading token of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Posts,
    MyProfile,
    Help,
    Unknown,
}

/// Checked in order; the first prefix that matches wins.
const PREFIXES: &[(&str, Command)] = &[
    ("/start", Command::Start),
    ("/posts", Command::Posts),
    ("/myprofile", Command::MyProfile),
    ("/help", Command::Help),
];

impl Command {
    /// Case-sensitive prefix match. `/postsfoo` is `Posts`, `/Posts` is `Unknown`.
    pub fn parse(text: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map_or(Command::Unknown, |(_, cmd)| *cmd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Posts => "posts",
            Command::MyProfile => "myprofile",
            Command::Help => "help",
            Command::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/posts"), Command::Posts);
        assert_eq!(Command::parse("/myprofile"), Command::MyProfile);
        assert_eq!(Command::parse("/help"), Command::Help);
    }

    #[test]
    fn prefix_match_wins() {
        assert_eq!(Command::parse("/postsfoo"), Command::Posts);
        assert_eq!(Command::parse("/start 12345"), Command::Start);
        assert_eq!(Command::parse("/help@PostBoardBot"), Command::Help);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Command::parse("/Posts"), Command::Unknown);
        assert_eq!(Command::parse("/HELP"), Command::Unknown);
    }

    #[test]
    fn non_commands_are_unknown() {
        assert_eq!(Command::parse("hello"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse(" /start"), Command::Unknown);
        assert_eq!(Command::parse("/profile"), Command::Unknown);
    }
}
