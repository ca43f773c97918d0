//! Menu commands for the interactive session.

use thiserror::Error;

/// One of the fixed entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Add a new contact.
    Add,
    /// Search for a contact by name or phone.
    Search,
    /// Remove a contact by name or phone.
    Remove,
    /// List all contacts.
    List,
    /// Leave the session.
    Exit,
}

/// Why a line of input did not select a menu command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    /// The input was not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The input was an integer outside the menu.
    #[error("unknown menu option: {0}")]
    UnknownOption(i32),
}

impl MenuCommand {
    /// All commands in menu order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Search, Self::Remove, Self::List, Self::Exit];

    /// Parse a line of user input as a menu choice.
    ///
    /// The line must be a plain signed integer written with ASCII digits;
    /// surrounding whitespace is not accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError::NotANumber`] if the line is not an integer and
    /// [`ChoiceError::UnknownOption`] if it names no menu entry.
    pub fn parse(line: &str) -> Result<Self, ChoiceError> {
        let choice: i32 = line
            .parse()
            .map_err(|_| ChoiceError::NotANumber(line.to_string()))?;
        Self::from_number(choice).ok_or(ChoiceError::UnknownOption(choice))
    }

    /// Look up the command shown under `number` in the menu.
    #[must_use]
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Self::Add),
            2 => Some(Self::Search),
            3 => Some(Self::Remove),
            4 => Some(Self::List),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The number this command is listed under.
    #[must_use]
    pub fn number(self) -> i32 {
        match self {
            Self::Add => 1,
            Self::Search => 2,
            Self::Remove => 3,
            Self::List => 4,
            Self::Exit => 5,
        }
    }

    /// The menu label for this command.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Contact",
            Self::Search => "Search Contact",
            Self::Remove => "Remove Contact",
            Self::List => "List Contacts",
            Self::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
