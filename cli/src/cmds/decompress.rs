use std::io::Write;

use crate::{App, Result};

use clap::SubCommand;
use lodb_core::{envelope, object::DEFAULT_MAX_OBJECT_SIZE};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("decompress")
        .about("Inflate a raw zlib stream from stdin, e.g. a loose object file")
}

pub(crate) fn run(app: &mut App) -> Result<()> {
    let mut compressed = Vec::new();
    app.stdin.read_to_end(&mut compressed)?;

    let inflated = envelope::unpack(&compressed, DEFAULT_MAX_OBJECT_SIZE)?;
    app.write_all(&inflated)?;

    Ok(())
}
