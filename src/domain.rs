use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Eq, PartialOrd, Ord)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    /// Duplicate policy: same name ignoring case and the exact same phone.
    /// Email is free to differ.
    pub fn duplicate_of(&self, other: &Contact) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase() && self.phone == other.phone
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.phone.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn apply(&self, contact: &mut Contact, value: &str) {
        match self {
            ContactField::Name => contact.name = value.to_string(),
            ContactField::Phone => contact.phone = value.to_string(),
            ContactField::Email => contact.email = value.to_string(),
        }
    }
}

/// How the user points at one contact: a 1-based list position, or a
/// full name. Anything that parses as an unsigned number is taken as a
/// position and never falls back to a name lookup.
#[derive(Debug, PartialEq)]
pub enum Selector {
    Index(usize),
    Name(String),
}

impl Selector {
    pub fn parse(raw: &str) -> Selector {
        let raw = raw.trim();
        match raw.parse::<usize>() {
            Ok(position) => Selector::Index(position),
            Err(_) => Selector::Name(raw.to_string()),
        }
    }

    pub fn resolve(&self, contacts: &[Contact]) -> Option<usize> {
        match self {
            Selector::Index(position) => {
                if *position >= 1 && *position <= contacts.len() {
                    Some(position - 1)
                } else {
                    None
                }
            }
            Selector::Name(name) => {
                let name = name.to_lowercase();
                contacts
                    .iter()
                    .position(|contact| contact.name.to_lowercase() == name)
            }
        }
    }
}
