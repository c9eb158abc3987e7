const MAX_TERMINAL_ENTRIES: usize = 200;

pub(crate) const TERMINAL_BANNER: &str = "MinecraftOS Terminal";
pub(crate) const TERMINAL_HINT: &str = "Type `help` for commands.";

const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    ("help", "list available commands"),
    ("clear", "clear the screen"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered transcript row.
pub enum TerminalEntry {
    /// Banner and hint rows.
    System(String),
    /// Echo of a submitted command line.
    Prompt(String),
    /// Command output.
    Output(String),
    /// Command failure.
    Error(String),
}

impl TerminalEntry {
    /// Returns the display text for the row.
    pub fn render(&self) -> String {
        match self {
            Self::Prompt(command) => format!("> {command}"),
            Self::System(text) | Self::Output(text) | Self::Error(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Built-in command interpreter with its transcript.
///
/// Only `help` and `clear` are recognized; anything else reports `command not found`.
pub struct TerminalSession {
    transcript: Vec<TerminalEntry>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            transcript: default_transcript(),
        }
    }
}

fn default_transcript() -> Vec<TerminalEntry> {
    vec![
        TerminalEntry::System(TERMINAL_BANNER.to_string()),
        TerminalEntry::System(TERMINAL_HINT.to_string()),
    ]
}

impl TerminalSession {
    /// Returns the transcript, oldest row first.
    pub fn transcript(&self) -> &[TerminalEntry] {
        &self.transcript
    }

    /// Runs one input line.
    ///
    /// Blank input is ignored. Otherwise the prompt echo is appended before the command runs, so
    /// `clear` also removes its own echo.
    pub fn execute(&mut self, input: &str) {
        let line = input.trim();
        if line.is_empty() {
            return;
        }

        self.push(TerminalEntry::Prompt(line.to_string()));

        let command = line.split_whitespace().next().unwrap_or(line);
        match command {
            "help" => {
                self.push(TerminalEntry::Output("Available commands:".to_string()));
                for (name, summary) in BUILTIN_COMMANDS {
                    self.push(TerminalEntry::Output(format!("  {name:<6} {summary}")));
                }
            }
            "clear" => self.transcript.clear(),
            other => self.push(TerminalEntry::Error(format!("command not found: {other}"))),
        }
    }

    fn push(&mut self, entry: TerminalEntry) {
        self.transcript.push(entry);
        if self.transcript.len() > MAX_TERMINAL_ENTRIES {
            let overflow = self.transcript.len() - MAX_TERMINAL_ENTRIES;
            self.transcript.drain(0..overflow);
        }
    }
}
