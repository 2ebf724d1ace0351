// Guests staying in a room

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub contact: String,
    pub gender: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            gender: gender.into(),
        }
    }
}

// Single rooms carry only the primary guest; double rooms need both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub primary: Guest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Guest>,
}

impl Occupant {
    pub fn single(guest: Guest) -> Self {
        Self {
            primary: guest,
            secondary: None,
        }
    }

    pub fn double(first: Guest, second: Guest) -> Self {
        Self {
            primary: first,
            secondary: Some(second),
        }
    }

    pub fn guest_count(&self) -> usize {
        if self.secondary.is_some() {
            2
        } else {
            1
        }
    }
}
