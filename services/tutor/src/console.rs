//! Line-oriented terminal session.
//!
//! The console lists the profiles, reads a numbered choice, then reads
//! commands until the learner types `exit` or input runs out. It is generic
//! over tokio readers and writers so whole sessions can be replayed in tests.

use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use tutor_core::{CompletionBackend, Topic, TutoringAgent, UserProfile};

const BANNER: &str = "### MATH TUTOR ###";
const COMMAND_PROMPT: &str = "\nEnter a topic, or 'switch'/'exit': ";

/// One line of learner input after the agent is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Switch,
    Teach(Topic),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            Command::Exit
        } else if line.eq_ignore_ascii_case("switch") {
            Command::Switch
        } else {
            Topic::new(line).map_or(Command::Empty, Command::Teach)
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    /// Shows `prompt` and reads one line. `None` means end of input.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Lists the profiles and reads a 1-based choice until a valid one arrives.
    pub async fn select_profile(&mut self) -> io::Result<Option<UserProfile>> {
        self.say("Choose a teaching level:").await?;
        for (idx, profile) in UserProfile::ALL.iter().enumerate() {
            self.say(&format!("[{}] - {}", idx + 1, profile.label())).await?;
        }

        loop {
            let Some(line) = self.ask("Enter the number: ").await? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(choice) => match UserProfile::from_selection(choice) {
                    Some(profile) => return Ok(Some(profile)),
                    None => self.say("Invalid option.").await?,
                },
                Err(_) => self.say("Please enter a valid number.").await?,
            }
        }
    }

    /// Reads commands and dispatches them to `agent` until the learner leaves.
    pub async fn run(&mut self, agent: &mut TutoringAgent) -> io::Result<()> {
        loop {
            let command = match self.ask(COMMAND_PROMPT).await? {
                Some(line) => Command::parse(&line),
                None => Command::Exit,
            };
            debug!(?command, "Console command");

            match command {
                Command::Exit => {
                    self.say("Goodbye!").await?;
                    return Ok(());
                }
                Command::Switch => match self.select_profile().await? {
                    Some(profile) => {
                        agent.set_profile(profile);
                        self.say(&format!("Switched to: {}", profile.label())).await?;
                    }
                    None => {
                        self.say("Goodbye!").await?;
                        return Ok(());
                    }
                },
                Command::Teach(topic) => {
                    self.say(&format!("Looking up an explanation of '{}'...", topic))
                        .await?;
                    let explanation = agent.teach(&topic).await;
                    self.say(&explanation).await?;
                }
                Command::Empty => self.say("Invalid input.").await?,
            }
        }
    }

    /// Runs a whole session: banner, profile selection, then the command loop.
    ///
    /// `initial_profile` skips the selection menu when already known.
    pub async fn run_session(
        &mut self,
        backend: Arc<dyn CompletionBackend>,
        initial_profile: Option<UserProfile>,
    ) -> io::Result<()> {
        self.say(BANNER).await?;

        let profile = match initial_profile {
            Some(profile) => profile,
            None => match self.select_profile().await? {
                Some(profile) => profile,
                None => return Ok(()),
            },
        };

        let mut agent = TutoringAgent::new(profile, backend);
        self.say(&format!("Tutor ready for: {}", profile.label())).await?;
        self.run(&mut agent).await
    }
}
