use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod command;
mod options;
mod roll;
mod session;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
