use crate::{command::Command, roll::Roll};
use anyhow::Error as Anyhow;
use lib::chess::Square;
use lib::engine::{Engine, MatchState, Phase};
use std::{fmt, time::Duration};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Describes what the match is waiting for.
struct Prompt<'a>(&'a MatchState);

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let turn = s.position().turn();

        match (s.phase(), s.dice(), s.selected()) {
            (Phase::GameOver, _, _) => match s.position().outcome() {
                Some(o) => write!(f, "Game over, {o}."),
                None => write!(f, "Game over."),
            },

            (Phase::Summon, _, _) => write!(f, "{turn}, place the summoned King on an empty tile."),

            (Phase::Move, Some(d), Some(sq)) => {
                write!(f, "{turn} rolled a {d}, move {sq} to any of")?;
                for t in s.destinations() {
                    write!(f, " {t}")?;
                }

                Ok(())
            }

            (Phase::Select | Phase::Move, Some(d), _) => {
                write!(f, "{turn} rolled a {d}, select a piece.")
            }

            _ => write!(f, "{turn} to roll."),
        }
    }
}

/// A match played over a line based text interface.
#[derive(Debug)]
pub struct Session<D: Roll> {
    engine: Engine,
    die: D,
    delay: Duration,
    seen: usize,
}

impl<D: Roll> Session<D> {
    pub fn new(engine: Engine, die: D, delay: Duration) -> Self {
        Session {
            engine,
            die,
            delay,
            seen: 0,
        }
    }

    /// Reads commands until `quit` or the end of input.
    #[instrument(level = "trace", skip_all, err)]
    pub async fn run<W, R>(&mut self, mut writer: W, reader: R) -> Result<(), Anyhow>
    where
        W: AsyncWrite + Unpin,
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        self.render(&mut writer).await?;

        while let Some(line) = lines.next_line().await? {
            let cmd = match line.parse::<Command>() {
                Ok(cmd) => cmd,
                Err(e) => {
                    writer.write_all(format!("{e}\n").as_bytes()).await?;
                    writer.flush().await?;
                    continue;
                }
            };

            debug!(%cmd, "received");

            let result = match cmd {
                Command::Quit => break,
                Command::Show => Ok(()),

                Command::Restart => {
                    self.engine.restart();
                    self.seen = 0;
                    Ok(())
                }

                Command::Roll(face) => {
                    let dice = face.unwrap_or_else(|| self.die.roll());
                    let skips = self.engine.state().skips();
                    let result = self.engine.roll(dice);

                    if self.engine.state().skips() > skips {
                        self.render(&mut writer).await?;
                        sleep(self.delay).await;
                    }

                    result
                }

                Command::Click(sq) => self.engine.click(sq),
            };

            match result {
                Err(e) if !e.is_reported() => {
                    writer.write_all(format!("{e}\n").as_bytes()).await?;
                }

                _ => {}
            }

            self.render(&mut writer).await?;
        }

        writer.flush().await?;
        Ok(())
    }

    /// Prints the board, the log entries not yet shown and the prompt.
    async fn render<W: AsyncWrite + Unpin>(&mut self, writer: &mut W) -> Result<(), Anyhow> {
        let state = self.engine.state();
        let mut out = String::new();

        for row in 0..Square::SIDE {
            for col in 0..Square::SIDE {
                let sq = Square::new(row, col);
                let marker = if state.selected() == Some(sq) {
                    '['
                } else if state.destinations().contains(sq) {
                    '*'
                } else {
                    ' '
                };

                out.push(marker);
                match state.position().board()[sq] {
                    None => out.push_str(".."),
                    Some(pc) => out.push_str(&pc.to_string()),
                }
            }

            out.push('\n');
        }

        for e in state.log().iter().skip(self.seen) {
            out.push_str(&format!("> {e}\n"));
        }

        self.seen = state.log().len();
        out.push_str(&format!("{}\n", Prompt(&state)));

        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}
