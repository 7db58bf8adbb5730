use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{Contact, ContactFields};

pub fn run(contacts: &mut [Contact], index: usize, fields: ContactFields) -> Result<CmdResult> {
    if index < 1 || index > contacts.len() {
        return Err(PhonebookError::IndexOutOfRange {
            index,
            len: contacts.len(),
        });
    }

    let contact = &mut contacts[index - 1];
    contact.apply(fields);

    let mut result = CmdResult::default().with_affected(vec![contact.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Contact {} updated: {}",
        index,
        contact.full_name()
    )));
    Ok(result)
}
