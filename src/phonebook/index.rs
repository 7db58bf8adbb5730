use crate::model::Contact;

/// A contact paired with its 1-based position in the directory sequence.
///
/// The position doubles as the contact's identity: it is the number shown in
/// listings and the number `edit` takes. Search results and pages carry their
/// absolute directory positions, so any number a user sees is a valid edit
/// target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedContact {
    pub index: usize,
    pub contact: Contact,
}

/// Pairs every contact with its directory position, starting at 1.
pub fn index_contacts(contacts: &[Contact]) -> Vec<IndexedContact> {
    contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| IndexedContact {
            index: i + 1,
            contact: contact.clone(),
        })
        .collect()
}
