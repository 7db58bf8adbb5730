use crate::error::{PhonebookError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

/// A validated phone number: exactly 11 digits.
///
/// Construction goes through [`FromStr`], and serde deserialization goes
/// through the same validation, so a `Phone` held in memory always satisfies
/// the format invariant no matter where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        if PHONE_RE.is_match(s) {
            Ok(Phone(s.to_string()))
        } else {
            Err(PhonebookError::InvalidPhone(s.to_string()))
        }
    }
}

impl TryFrom<String> for Phone {
    type Error = PhonebookError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored contact. No identity field; identity is the contact's 1-based
/// position in the directory sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: Phone,
    pub personal_phone: Phone,
}

/// The input payload for creating or editing a contact: every field named,
/// phones already validated.
#[derive(Debug, Clone)]
pub struct ContactFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: Phone,
    pub personal_phone: Phone,
}

impl Contact {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            last_name: fields.last_name,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            organization: fields.organization,
            work_phone: fields.work_phone,
            personal_phone: fields.personal_phone,
        }
    }

    /// Replace every field in place, keeping the contact's position.
    pub fn apply(&mut self, fields: ContactFields) {
        *self = Contact::new(fields);
    }

    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }
}

// The searchable haystack: every field joined into one line.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.full_name(),
            self.organization,
            self.work_phone,
            self.personal_phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_eleven_digits() {
        let phone: Phone = "79991234567".parse().unwrap();
        assert_eq!(phone.as_str(), "79991234567");
    }

    #[test]
    fn phone_rejects_ten_digits() {
        assert!(matches!(
            "7999123456".parse::<Phone>(),
            Err(PhonebookError::InvalidPhone(_))
        ));
    }

    #[test]
    fn phone_rejects_non_digit() {
        assert!("7999123456a".parse::<Phone>().is_err());
    }

    #[test]
    fn phone_rejects_empty() {
        assert!("".parse::<Phone>().is_err());
    }

    #[test]
    fn phone_deserialization_validates() {
        let err = serde_json::from_str::<Phone>("\"123\"");
        assert!(err.is_err());
    }

    #[test]
    fn contact_roundtrips_through_json() {
        let contact = Contact::new(ContactFields {
            last_name: "Иванов".into(),
            first_name: "Иван".into(),
            middle_name: "Иванович".into(),
            organization: "Acme".into(),
            work_phone: "79991234567".parse().unwrap(),
            personal_phone: "79997654321".parse().unwrap(),
        });

        let json = serde_json::to_string(&contact).unwrap();
        let parsed: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(contact, parsed);
    }

    #[test]
    fn display_includes_every_field() {
        let contact = Contact::new(ContactFields {
            last_name: "Smith".into(),
            first_name: "Anna".into(),
            middle_name: "J".into(),
            organization: "Globex".into(),
            work_phone: "79991234567".parse().unwrap(),
            personal_phone: "79997654321".parse().unwrap(),
        });

        let text = contact.to_string();
        for needle in ["Smith", "Anna", "J", "Globex", "79991234567", "79997654321"] {
            assert!(text.contains(needle), "missing {needle} in {text:?}");
        }
    }
}
