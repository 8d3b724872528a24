use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single keystroke that triggers a keybinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key(char);

impl Key {
    /// Returns `None` for whitespace and control characters.
    pub fn new(c: char) -> Option<Self> {
        jobfile_parser::is_key_char(c).then_some(Key(c))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl FromStr for Key {
    type Err = jobfile_parser::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        jobfile_parser::parse_key(s).map(Key)
    }
}

impl TryFrom<String> for Key {
    type Error = jobfile_parser::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let key: Key = "s".parse().unwrap();
        assert_eq!(key.as_char(), 's');
        assert_eq!(key.to_string(), "s");
    }

    #[test]
    fn constructor_agrees_with_parser() {
        for c in ['a', 'Z', '?', ' ', '\n'] {
            assert_eq!(Key::new(c), c.to_string().parse().ok());
        }
    }
}
