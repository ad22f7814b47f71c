//! # Greetings 🦀
//!
//! Greets the world in a few human languages, one numbered line per language.
//!
//! Try this out `cargo run`.
use std::{
    fmt,
    io::{self, Write},
    result,
};

use tracing::{debug, info};

use crate::Error::*;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("writing to the standard output failed")]
    OutputWrite(#[source] io::Error),
}

/// A "hello world" translation, `id` is its 1-based position in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub id: u32,
    pub language: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Greeting {
    /// Formats as `<id>. [<language>] <message>`, without line ending.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. [{}] {}", self.id, self.language, self.message)
    }
}

pub static GREETINGS: [Greeting; 5] = [
    Greeting {
        id: 1,
        language: "English",
        message: "Hello, World!",
    },
    Greeting {
        id: 2,
        language: "Spanish",
        message: "Hola, Mundo!",
    },
    Greeting {
        id: 3,
        language: "French",
        message: "Bonjour, le Monde!",
    },
    Greeting {
        id: 4,
        language: "German",
        message: "Hallo, Welt!",
    },
    Greeting {
        id: 5,
        language: "Italian",
        message: "Ciao, Mondo!",
    },
];

/// Writes one line per greeting, then a blank line and the total count.
///
/// **Warning!**: Line endings are always LF byte.
pub fn write_greetings(out: &mut impl Write, greetings: &[Greeting]) -> Result<()> {
    for greeting in greetings {
        debug!("writing greeting {}", greeting.id);
        writeln!(out, "{greeting}").map_err(OutputWrite)?;
    }
    writeln!(out, "\nTotal greetings: {}", greetings.len()).map_err(OutputWrite)?;
    out.flush().map_err(OutputWrite)?;
    info!("{} greetings written", greetings.len());
    Ok(())
}

/// Prints [GREETINGS] to the standard output.
pub fn print_greetings() -> Result<()> {
    write_greetings(&mut io::stdout().lock(), &GREETINGS)
}
