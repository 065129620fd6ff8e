//! Interactive driver for the menu state machine.
//!
//! [`Shell`] owns the input and output streams. It reads one line, feeds it
//! to [`transition`], performs the returned effect to completion, then shows
//! the prompt for the new state. Store diagnostics (missing or corrupted
//! file) go through the message macros, everything else to the shell's
//! output.

use super::{add, complete, list};
use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::shell::{transition, Effect, ShellState};
use anyhow::Result;
use std::mem;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    output: W,
    state: ShellState,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            state: ShellState::default(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` is entered or the input ends.
    ///
    /// Only failures to read input or write output end the loop early; task
    /// operation failures are reported and the menu comes back.
    pub async fn run(&mut self) -> io::Result<()> {
        self.write_line(&Message::Welcome).await?;
        self.write_prompt().await?;

        let mut buf = Vec::new();
        while !self.state.is_closed() {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf).await? == 0 {
                self.state = ShellState::Closed;
                self.write_line(&Message::Goodbye).await?;
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.strip_suffix('\n').unwrap_or(text.as_ref());
            let line = line.strip_suffix('\r').unwrap_or(line);

            let (next, effect) = transition(mem::take(&mut self.state), line);
            tracing::debug!(state = ?next, ?effect, "shell transition");
            self.state = next;

            if let Some(effect) = effect {
                if let Err(e) = self.perform(effect).await {
                    self.write_line(&Message::UnexpectedError(e.to_string())).await?;
                }
            }
            if !self.state.is_closed() {
                self.write_prompt().await?;
            }
        }
        Ok(())
    }

    async fn perform(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Print(message) => self.write_line(&message).await?,
            Effect::ListTasks => {
                self.write_line(&Message::ListingTasks).await?;
                let outcome = list::run(&self.store).await;
                self.write_lines(outcome.messages()).await?;
            }
            Effect::AddTask { title, description } => match add::run(&self.store, &title, &description).await {
                Ok(outcome) => self.write_lines(outcome.messages()).await?,
                Err(e) => self.write_line(&Message::TaskAddFailed(e.to_string())).await?,
            },
            Effect::CompleteTask { title } => match complete::run(&self.store, &title).await {
                Ok(outcome) => self.write_line(&outcome.message()).await?,
                Err(e) => self.write_line(&Message::TaskCompleteFailed(e.to_string())).await?,
            },
            Effect::Close => self.write_line(&Message::Goodbye).await?,
        }
        Ok(())
    }

    async fn write_prompt(&mut self) -> io::Result<()> {
        if let Some(prompt) = self.state.prompt() {
            self.output.write_all(prompt.to_string().as_bytes()).await?;
            self.output.flush().await?;
        }
        Ok(())
    }

    async fn write_line(&mut self, message: &Message) -> io::Result<()> {
        self.output.write_all(format!("{}\n", message).as_bytes()).await?;
        self.output.flush().await
    }

    async fn write_lines(&mut self, messages: Vec<Message>) -> io::Result<()> {
        for message in &messages {
            self.write_line(message).await?;
        }
        Ok(())
    }
}

/// Runs the shell on the process's stdin and stdout.
pub async fn cmd(config: &Config) -> Result<()> {
    let mut shell = Shell::new(config.store(), BufReader::new(io::stdin()), io::stdout());
    shell.run().await?;
    Ok(())
}
