use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactFields};

pub fn run(contacts: &mut Vec<Contact>, fields: ContactFields) -> Result<CmdResult> {
    let contact = Contact::new(fields);
    contacts.push(contact.clone());

    let mut result = CmdResult::default().with_affected(vec![contact]);
    result.add_message(CmdMessage::success("Contact added."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn appends_to_the_end() {
        let mut contacts = fixtures::contacts(2);
        run(&mut contacts, fixtures::fields("Ivanov", "Ivan")).unwrap();

        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[2].last_name, "Ivanov");
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut contacts = Vec::new();
        run(&mut contacts, fixtures::fields("Ivanov", "Ivan")).unwrap();
        run(&mut contacts, fixtures::fields("Ivanov", "Ivan")).unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0], contacts[1]);
    }

    #[test]
    fn reports_the_added_contact() {
        let mut contacts = Vec::new();
        let result = run(&mut contacts, fixtures::fields("Ivanov", "Ivan")).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].last_name, "Ivanov");
        assert_eq!(result.messages.len(), 1);
    }
}
