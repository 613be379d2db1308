//! Newtypes for the two opaque identifier strings in the event model.
//!
//! `event_id`/`item_id` are opaque strings on the wire; we still wrap them
//! rather than passing bare `String`s around, so a missing/empty id is
//! rejected once at the boundary instead of silently flowing through the
//! pipeline as `""`.

use crate::errors::CoreError;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MAX_ID_LEN: usize = 256;

fn validate(s: &str) -> Result<(), CoreError> {
    if s.is_empty() {
        return Err(CoreError::EmptyId);
    }
    if s.len() > MAX_ID_LEN {
        return Err(CoreError::IdTooLong);
    }
    if s.chars().any(|c| c.is_control()) {
        return Err(CoreError::InvalidIdChar);
    }
    Ok(())
}

macro_rules! def_id {
    ($name:ident) => {
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;
            fn try_from(s: String) -> Result<Self, Self::Error> {
                validate(&s)?;
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.0
            }
        }
    };
}

def_id!(EventId);
def_id!(ItemId);
