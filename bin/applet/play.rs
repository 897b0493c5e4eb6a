use crate::{options::Options, roll::Die, session::Session};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::engine::Engine;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{info, instrument};

/// A match of Chaturaji on the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Session configuration.
    #[clap(short, long, default_value_t)]
    options: Options,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        info!(options = %self.options, "starting a new match");

        let die = Die::new(self.options.seed);
        let mut session = Session::new(Engine::default(), die, self.options.delay);
        session.run(stdout(), BufReader::new(stdin())).await
    }
}
