use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::IndexedContact;
use crate::model::Contact;

/// Returns one page of the directory: the slice
/// `[(page-1)*per_page, page*per_page)` clipped to bounds. Pages are 1-based;
/// a page outside the directory is an empty result, not an error.
pub fn run(contacts: &[Contact], page: usize, per_page: usize) -> Result<CmdResult> {
    if page == 0 || per_page == 0 {
        return Ok(CmdResult::default());
    }

    let start = (page - 1).saturating_mul(per_page);
    if start >= contacts.len() {
        return Ok(CmdResult::default());
    }
    let end = start.saturating_add(per_page).min(contacts.len());

    let listed = contacts[start..end]
        .iter()
        .enumerate()
        .map(|(i, contact)| IndexedContact {
            index: start + i + 1,
            contact: contact.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
