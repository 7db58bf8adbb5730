use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Contact, ContactFields};

    /// A valid contact with deterministic field values derived from `n`.
    pub fn contact(n: usize) -> Contact {
        Contact::new(ContactFields {
            last_name: format!("Last{n}"),
            first_name: format!("First{n}"),
            middle_name: format!("Middle{n}"),
            organization: format!("Org{n}"),
            work_phone: format!("7999000{:04}", n).parse().unwrap(),
            personal_phone: format!("7888000{:04}", n).parse().unwrap(),
        })
    }

    pub fn contacts(count: usize) -> Vec<Contact> {
        (1..=count).map(contact).collect()
    }

    pub fn fields(last_name: &str, first_name: &str) -> ContactFields {
        ContactFields {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_name: String::new(),
            organization: String::new(),
            work_phone: "79990000000".parse().unwrap(),
            personal_phone: "78880000000".parse().unwrap(),
        }
    }
}
