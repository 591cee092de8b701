//! MQTT topic-name checks.
//!
//! A device publishes to a topic *name*, so the wildcard characters that are
//! only legal in subscription filters are rejected.

use core::fmt;

use crate::constants::MAX_TOPIC_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty,
    TooLong,
    Wildcard,
    NulCharacter,
}

impl Error {
    pub const fn message(self) -> &'static str {
        match self {
            Error::Empty => "MQTT topic is empty",
            Error::TooLong => "MQTT topic exceeds 65535 bytes",
            Error::Wildcard => "MQTT topic contains a '+' or '#' wildcard",
            Error::NulCharacter => "MQTT topic contains a NUL character",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub const fn validate(topic: &str) -> Result<(), Error> {
    let bytes = topic.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty);
    }
    if bytes.len() > MAX_TOPIC_LEN {
        return Err(Error::TooLong);
    }

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' | b'#' => return Err(Error::Wildcard),
            0 => return Err(Error::NulCharacter),
            _ => {}
        }
        i += 1;
    }

    Ok(())
}
