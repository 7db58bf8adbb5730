use crate::index::IndexedContact;
use crate::model::Contact;

pub mod add;
pub mod edit;
pub mod list;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What an operation did, as data: the contacts it touched, the contacts it
/// selected for display, and any user-facing messages. The CLI decides how to
/// render all of it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Contact>,
    pub listed: Vec<IndexedContact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_listed(mut self, contacts: Vec<IndexedContact>) -> Self {
        self.listed = contacts;
        self
    }
}
