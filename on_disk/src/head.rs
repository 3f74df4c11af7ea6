use std::fmt::{self, Display, Formatter};

use lodb_core::object::Id;
use lodb_core::{Error, Result};

/// The repository's single symbolic pointer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Head {
    /// Names a reference, e.g. `refs/heads/master`.
    Symbolic(String),

    /// Names an object directly.
    Detached(Id),
}

impl Head {
    /// A symbolic HEAD pointing at `refs/heads/<branch>`.
    pub fn branch(branch: &str) -> Result<Head> {
        Head::symbolic(format!("refs/heads/{}", branch))
    }

    /// A symbolic HEAD pointing at the given reference path.
    pub fn symbolic<S: Into<String>>(refname: S) -> Result<Head> {
        let refname = refname.into();
        check_refname(&refname)?;
        Ok(Head::Symbolic(refname))
    }

    /// Parse the content of a HEAD file.
    pub fn parse(content: &str) -> Result<Head> {
        let line = content.strip_suffix('\n').unwrap_or(content);

        if let Some(refname) = line.strip_prefix("ref: ") {
            return Head::symbolic(refname);
        }

        Id::from_hex(line)
            .map(Head::Detached)
            .map_err(|_| Error::InvalidHead(format!("unrecognized content {:?}", content)))
    }

    /// Check that a symbolic HEAD names a well-formed reference. The
    /// variants are public, so a `Head` built directly may not.
    pub fn validate(&self) -> Result<()> {
        match self {
            Head::Symbolic(refname) => check_refname(refname),
            Head::Detached(_) => Ok(()),
        }
    }

    /// The exact bytes written to the HEAD file.
    pub fn to_file_content(&self) -> String {
        format!("{}\n", self)
    }
}

impl Display for Head {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Head::Symbolic(refname) => write!(f, "ref: {}", refname),
            Head::Detached(id) => write!(f, "{}", id),
        }
    }
}

fn check_refname(refname: &str) -> Result<()> {
    let valid = refname.starts_with("refs/")
        && !refname.ends_with('/')
        && refname
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
        && !refname
            .chars()
            .any(|c| c.is_whitespace() || c.is_control());

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidHead(format!("invalid reference name {:?}", refname)))
    }
}
