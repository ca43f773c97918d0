//! Interactive menu session.
//!
//! A [`Session`] owns a [`ContactList`] for the lifetime of one run and
//! drives it from a line-oriented input. The session is generic over its
//! input and output so it can run against a terminal or an in-memory buffer.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::debug;

use crate::config::Config;
use crate::contact::Contact;
use crate::contact_list::ContactList;
use crate::error::Result;
use crate::menu::{ChoiceError, MenuCommand};

const NOT_FOUND: &str = "Contact not found.";
const KEY_PROMPT: &str = "Enter name or phone: ";

/// An interactive address-book session.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    contacts: ContactList,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty contact list.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            contacts: ContactList::new(),
        }
    }

    /// The contacts entered so far.
    #[must_use]
    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    /// Run the menu loop until the user exits or the input ends.
    ///
    /// Invalid menu input is reported to the user and never ends the loop.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        debug!("Session started");

        if self.config.menu.show_banner {
            writeln!(self.output, "{}", self.config.title())?;
        }

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match MenuCommand::parse(&line) {
                Ok(command) => command,
                Err(ChoiceError::NotANumber(_)) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
                Err(ChoiceError::UnknownOption(_)) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
            };

            if self.dispatch(command)?.is_break() {
                break;
            }
        }

        self.output.flush()?;
        debug!(contacts = self.contacts.len(), "Session finished");
        Ok(())
    }

    /// Execute one menu command. Breaks when the session should end.
    fn dispatch(&mut self, command: MenuCommand) -> Result<ControlFlow<()>> {
        debug!(?command, "Dispatching menu command");
        match command {
            MenuCommand::Add => self.add(),
            MenuCommand::Search => self.search(),
            MenuCommand::Remove => self.remove(),
            MenuCommand::List => {
                self.list()?;
                Ok(ControlFlow::Continue(()))
            }
            MenuCommand::Exit => {
                writeln!(
                    self.output,
                    "Exiting. Thank you for using the {}!",
                    self.config.title()
                )?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn add(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "\n--- Add Contact ---")?;

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(phone) = self.prompt("Phone: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.contacts.add(Contact::new(name, phone, email));
        writeln!(self.output, "Contact added successfully!")?;
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "\n--- Search Contact ---")?;

        let Some(key) = self.prompt(KEY_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.contacts.search(&key) {
            Some(contact) => {
                writeln!(self.output, "\nContact found:")?;
                writeln!(self.output, "{contact}")?;
            }
            None => writeln!(self.output, "{NOT_FOUND}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "\n--- Remove Contact ---")?;

        let Some(key) = self.prompt(KEY_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };

        if self.contacts.remove(&key) {
            writeln!(self.output, "Contact removed successfully!")?;
        } else {
            writeln!(self.output, "{NOT_FOUND}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Contact List ---")?;

        let contacts = self.contacts.list();
        let total = contacts.len();
        if total == 0 {
            writeln!(self.output, "The contact list is empty.")?;
            return Ok(());
        }

        for (index, contact) in contacts.enumerate() {
            writeln!(self.output, "\nContact #{}", index + 1)?;
            writeln!(self.output, "{contact}")?;
        }

        if self.config.display.show_total {
            writeln!(self.output, "\nTotal contacts: {total}")?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n===== MENU =====")?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "{command}")?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let Some(bytes) = read_line_bytes(&mut self.input)? else {
            debug!("Input closed");
            return Ok(None);
        };
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// UTF-8 encodings of NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
const UNICODE_LINE_ENDS: [&[u8]; 3] = [b"\xc2\x85", b"\xe2\x80\xa8", b"\xe2\x80\xa9"];

/// Read raw bytes up to the next line terminator, which is consumed but not
/// returned.
///
/// `\n`, `\r\n`, a lone `\r`, U+0085, U+2028 and U+2029 all end a line. A
/// final line without a terminator is still returned. `None` means the input
/// was already exhausted.
fn read_line_bytes<R: BufRead>(input: &mut R) -> std::io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut read_any = false;

    loop {
        let Some(&byte) = input.fill_buf()?.first() else {
            break;
        };
        input.consume(1);
        read_any = true;

        match byte {
            b'\n' => return Ok(Some(line)),
            b'\r' => {
                if input.fill_buf()?.first() == Some(&b'\n') {
                    input.consume(1);
                }
                return Ok(Some(line));
            }
            _ => {
                line.push(byte);
                if let Some(end) = UNICODE_LINE_ENDS.iter().find(|end| line.ends_with(end)) {
                    line.truncate(line.len() - end.len());
                    return Ok(Some(line));
                }
            }
        }
    }

    Ok(read_any.then_some(line))
}
