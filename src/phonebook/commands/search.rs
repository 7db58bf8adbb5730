use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::index::index_contacts;
use crate::model::Contact;

/// Case-insensitive substring search over each contact's full textual
/// rendering. A blank term is a user error; no matches is an empty result with
/// an informational message.
pub fn run(contacts: &[Contact], term: &str) -> Result<CmdResult> {
    if term.trim().is_empty() {
        return Err(PhonebookError::EmptySearchTerm);
    }

    let needle = term.to_lowercase();
    let listed: Vec<_> = index_contacts(contacts)
        .into_iter()
        .filter(|ic| ic.contact.to_string().to_lowercase().contains(&needle))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No matching contacts."));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn empty_term_is_rejected() {
        let contacts = fixtures::contacts(2);
        assert!(matches!(
            run(&contacts, ""),
            Err(PhonebookError::EmptySearchTerm)
        ));
    }

    #[test]
    fn whitespace_only_term_is_rejected() {
        let contacts = fixtures::contacts(2);
        assert!(matches!(
            run(&contacts, "   "),
            Err(PhonebookError::EmptySearchTerm)
        ));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut contacts = Vec::new();
        crate::commands::add::run(&mut contacts, fixtures::fields("Ivanov", "Ivan")).unwrap();

        let result = run(&contacts, "ivanov").unwrap();
        assert_eq!(result.listed.len(), 1);

        let result = run(&contacts, "IVANOV").unwrap();
        assert_eq!(result.listed.len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive_for_cyrillic() {
        let mut contacts = Vec::new();
        crate::commands::add::run(&mut contacts, fixtures::fields("Иванов", "Иван")).unwrap();

        let result = run(&contacts, "иванов").unwrap();
        assert_eq!(result.listed.len(), 1);

        let result = run(&contacts, "ИВАНОВ").unwrap();
        assert_eq!(result.listed.len(), 1);
    }

    #[test]
    fn matches_any_field() {
        let contacts = fixtures::contacts(3);

        // organization of the second fixture contact
        let result = run(&contacts, "org2").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].index, 2);

        // a phone substring
        let result = run(&contacts, "79990000003").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].index, 3);
    }

    #[test]
    fn no_matches_is_an_empty_result_with_a_message() {
        let contacts = fixtures::contacts(2);
        let result = run(&contacts, "nobody").unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn results_keep_directory_indexes() {
        let contacts = fixtures::contacts(5);
        let result = run(&contacts, "last4").unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].index, 4);
    }
}
