//! `contactbook` - An interactive, in-memory address book
//!
//! This library provides the contact record, the ordered contact list with
//! its name-or-phone lookup rules, and the menu session that drives them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod contact_list;
pub mod error;
pub mod logging;
pub mod menu;
pub mod session;

pub use config::Config;
pub use contact::Contact;
pub use contact_list::ContactList;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use menu::{ChoiceError, MenuCommand};
pub use session::Session;
