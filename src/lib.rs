pub mod app;
pub mod cli;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod validate;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
