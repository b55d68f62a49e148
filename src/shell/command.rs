//! Command parsing.
//!
//! Turns a command name and its ordered arguments into a typed [`Command`].
//! Arguments beyond what a command uses are ignored.

use crate::error::{BookError, BookResult};

/// Words that end the session.
pub const EXIT_COMMANDS: [&str; 3] = ["good bye", "close", "exit"];

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    Find {
        text: String,
    },
    ShowAll,
    Delete {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Birthday {
        name: String,
    },
    SetBirthday {
        name: String,
        birthday: String,
    },
    Generate,
    Help,
}

impl Command {
    /// Parse a command.
    ///
    /// Returns `None` for an unknown command name and
    /// `Some(Err(BookError::MissingArguments))` when a known command gets
    /// too few arguments.
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Option<BookResult<Self>> {
        let args = Args(args);
        let command = match name {
            "hello" => Ok(Self::Hello),
            "add" => args.require(2).map(|_| Self::Add {
                name: args.get(0),
                phone: args.get(1),
                birthday: args.optional(2),
            }),
            "change" => args.require(3).map(|_| Self::Change {
                name: args.get(0),
                old_phone: args.get(1),
                new_phone: args.get(2),
            }),
            "phone" => args.require(1).map(|_| Self::Phone { name: args.get(0) }),
            "find" => args.require(1).map(|_| Self::Find { text: args.get(0) }),
            "show_all" => Ok(Self::ShowAll),
            "delete" => args.require(1).map(|_| Self::Delete { name: args.get(0) }),
            "remove_phone" => args.require(2).map(|_| Self::RemovePhone {
                name: args.get(0),
                phone: args.get(1),
            }),
            "birthday" => args.require(1).map(|_| Self::Birthday { name: args.get(0) }),
            "set_birthday" => args.require(2).map(|_| Self::SetBirthday {
                name: args.get(0),
                birthday: args.get(1),
            }),
            "generate" => Ok(Self::Generate),
            "help" => Ok(Self::Help),
            _ => return None,
        };
        Some(command)
    }

    /// Whether running this command can change the directory.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Change { .. }
                | Self::Delete { .. }
                | Self::RemovePhone { .. }
                | Self::SetBirthday { .. }
                | Self::Generate
        )
    }
}

/// Split an input line into a lowercased command name and its arguments.
///
/// Only the command word is lowercased; arguments keep their case.
/// Returns `None` for a blank line.
pub fn split_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let name = words.next()?.to_lowercase();
    Some((name, words.map(str::to_string).collect()))
}

/// Whether `line` is one of the words that end the session.
pub fn is_exit(line: &str) -> bool {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let normalized = normalized.to_lowercase();
    EXIT_COMMANDS.contains(&normalized.as_str())
}

struct Args<'a, S>(&'a [S]);

impl<S: AsRef<str>> Args<'_, S> {
    fn require(&self, count: usize) -> BookResult<()> {
        if self.0.len() < count {
            return Err(BookError::MissingArguments);
        }
        Ok(())
    }

    fn get(&self, index: usize) -> String {
        self.0[index].as_ref().to_string()
    }

    fn optional(&self, index: usize) -> Option<String> {
        self.0.get(index).map(|s| s.as_ref().to_string())
    }
}
