use std::io::{self, IsTerminal};

use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;
use crate::session;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        today,
    } = cli;

    logging::init(verbose)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let ctx = AppContext::bootstrap(json, today, stdout.is_terminal());

    session::run(&ctx, stdin.lock(), stdout.lock())
}
