use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of bytes in a raw object ID (a SHA-1 digest).
pub const ID_LEN: usize = 20;

/// Number of characters in the hex form of an object ID.
pub const HEX_LEN: usize = ID_LEN * 2;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Uppercase hex digits are rejected too: object IDs are always
    /// written in lowercase.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    #[error("value is more than 40 digits long")]
    Overflow,

    #[error("value is less than 40 digits long")]
    Underflow,
}

/// An object ID identifies an object within a repository.
///
/// It is stored as a 20-byte digest and displayed as 40 lowercase hex digits.
/// IDs have no ordering beyond equality.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Id {
    id: [u8; ID_LEN],
}

impl Id {
    /// Create a new ID from a 20-byte slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            ID_LEN => {
                let mut raw = [0u8; ID_LEN];
                raw.copy_from_slice(id);
                Ok(Id { id: raw })
            }
            0 => Err(ParseIdError::Empty),
            n if n < ID_LEN => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            HEX_LEN => {
                if let Some(c) = hex
                    .iter()
                    .find(|c| !matches!(c, b'0'..=b'9' | b'a'..=b'f'))
                {
                    return Err(ParseIdError::InvalidDigit(*c as char));
                }

                let mut raw = [0u8; ID_LEN];
                hex::decode_to_slice(hex, &mut raw)
                    .map_err(|_| ParseIdError::InvalidDigit('?'))?;
                Ok(Id { id: raw })
            }
            0 => Err(ParseIdError::Empty),
            n if n < HEX_LEN => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Return the raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.id
    }

    /// Return the lowercase hex form of this ID.
    pub fn to_hex(&self) -> String {
        hex::encode(self.id)
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(id: [u8; ID_LEN]) -> Id {
        Id { id }
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self)
    }
}
