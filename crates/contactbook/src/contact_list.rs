//! In-memory contact container.
//!
//! Contacts are kept in insertion order. Lookup and removal scan from the
//! front and stop at the first contact selected by the key, so when several
//! contacts share a name or phone number the earliest one always wins.

use tracing::{debug, trace};

use crate::contact::Contact;

/// An ordered, in-memory list of contacts.
///
/// Duplicates are permitted. Order is exactly the insertion order minus any
/// removed entries; searching never reorders the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    /// Create an empty contact list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contact to the end of the list.
    pub fn add(&mut self, contact: Contact) {
        trace!(name = contact.name(), "Adding contact");
        self.contacts.push(contact);
        debug!("Contact list now holds {} contacts", self.contacts.len());
    }

    /// Find the first contact whose name matches `key` ignoring case, or
    /// whose phone number equals `key`.
    #[must_use]
    pub fn search(&self, key: &str) -> Option<&Contact> {
        let found = self.contacts.iter().find(|c| c.matches(key));
        debug!(key, found = found.is_some(), "Searched contacts");
        found
    }

    /// Remove the first contact selected by `key`.
    ///
    /// Uses the same match rule as [`ContactList::search`]. At most one
    /// contact is removed. Returns `true` if a contact was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(index) = self.position(key) else {
            debug!(key, "No contact to remove");
            return false;
        };

        let removed = self.contacts.remove(index);
        debug!(
            key,
            index,
            name = removed.name(),
            "Removed contact"
        );
        true
    }

    /// Iterate over all contacts in list order.
    ///
    /// The iterator's `len()` is the number of contacts.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &Contact> + '_ {
        self.contacts.iter()
    }

    /// Number of contacts in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check if the list holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.matches(key))
    }
}

impl FromIterator<Contact> for ContactList {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
