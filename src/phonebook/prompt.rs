//! Stdin prompting for the interactive flows. Everything here is presentation:
//! the library layers never read input, so the retry loops for phone numbers
//! and page numbers live in the binary.

use colored::*;
use phonebook::error::Result;
use phonebook::model::{Contact, ContactFields, Phone};
use std::io::{self, Write};

/// Print `prompt`, read one line, trim the line ending.
/// Exhausted stdin is an error, never an empty line.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

pub fn field(label: &str) -> Result<String> {
    read_line(&format!("{label}: "))
}

/// Prompt showing the current value; empty input keeps it.
fn field_with_default(label: &str, current: &str) -> Result<String> {
    let input = read_line(&format!("{label} [{current}]: "))?;
    Ok(if input.is_empty() {
        current.to_string()
    } else {
        input
    })
}

/// Prompt until the input parses as a valid phone number.
pub fn phone(label: &str) -> Result<Phone> {
    loop {
        match read_line(&format!("{label}: "))?.parse() {
            Ok(phone) => return Ok(phone),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Like [`phone`], but empty input keeps the current number.
fn phone_with_default(label: &str, current: &Phone) -> Result<Phone> {
    loop {
        let input = read_line(&format!("{label} [{current}]: "))?;
        if input.is_empty() {
            return Ok(current.clone());
        }
        match input.parse() {
            Ok(phone) => return Ok(phone),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Prompt until the input parses as a number.
pub fn number(label: &str) -> Result<usize> {
    loop {
        match read_line(&format!("{label}: "))?.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("{}", "Enter a number.".red()),
        }
    }
}

/// Prompt for every contact field, in the order the original record lays them
/// out: names, organization, then the two phones with their retry loops.
pub fn contact_fields() -> Result<ContactFields> {
    Ok(ContactFields {
        last_name: field("Last name")?,
        first_name: field("First name")?,
        middle_name: field("Middle name")?,
        organization: field("Organization")?,
        work_phone: phone("Work phone")?,
        personal_phone: phone("Personal phone")?,
    })
}

/// Prompt for every field, prefilled with the contact being edited.
pub fn contact_fields_with_defaults(current: &Contact) -> Result<ContactFields> {
    Ok(ContactFields {
        last_name: field_with_default("Last name", &current.last_name)?,
        first_name: field_with_default("First name", &current.first_name)?,
        middle_name: field_with_default("Middle name", &current.middle_name)?,
        organization: field_with_default("Organization", &current.organization)?,
        work_phone: phone_with_default("Work phone", &current.work_phone)?,
        personal_phone: phone_with_default("Personal phone", &current.personal_phone)?,
    })
}

/// A text field that may have arrived as a CLI flag; prompt only when absent.
pub fn field_from_flag(label: &str, flag: Option<String>) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => field(label),
    }
}

/// Resolve a phone that may have arrived as a CLI flag: a valid flag is used
/// as-is, an invalid one falls back to the prompt loop.
pub fn phone_from_flag(label: &str, flag: Option<String>) -> Result<Phone> {
    if let Some(raw) = flag {
        match raw.parse() {
            Ok(parsed) => return Ok(parsed),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
    phone(label)
}
