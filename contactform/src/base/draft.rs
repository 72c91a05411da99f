use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContactFormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// How a field is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Write your valuable message here...",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Field::Name => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Message => InputKind::TextArea,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = ContactFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            _ => Err(ContactFormError::UnknownField(s.to_string())),
        }
    }
}

/// Values of the contact form that have not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionDraft {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        SubmissionDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace exactly one field, the other two stay as they are.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), ContactFormError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
