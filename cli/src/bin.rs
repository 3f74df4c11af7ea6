#![deny(warnings)]

use std::{
    error::Error,
    io::{self, Write},
};

mod app;
pub(crate) use app::App;

mod cmds;
mod find_repo;
mod logging;
#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[cfg(not(tarpaulin_include))]
fn main() {
    // Keep as little as possible in this function so the rest stays reachable
    // from in-process tests.

    logging::init();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    // Output is held back until the command succeeds, so a failure partway
    // through never leaves partial output on stdout.
    let mut buffered: Vec<u8> = Vec::new();

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut buffered,
    };

    let r = app.run();

    std::process::exit(match r {
        Ok(()) => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            match stdout.write_all(&buffered).and_then(|_| stdout.flush()) {
                Ok(()) => 0,
                Err(err) => {
                    eprintln!("ERROR: {}", err);
                    1
                }
            }
        }
        Err(err) => {
            eprintln!("ERROR: {}", app::error_chain(err.as_ref()));
            1
        }
    });
}
