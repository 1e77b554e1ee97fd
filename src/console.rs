//! Output consoles for command results, registered on the processes panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLineSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub severity: ConsoleLineSeverity,
    pub text: String,
}

/// One command's output, created under a fixed command label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConsole {
    command_name: String,
    lines: Vec<ConsoleLine>,
}

impl OutputConsole {
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            lines: Vec::new(),
        }
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.lines.push(ConsoleLine {
            severity: ConsoleLineSeverity::Info,
            text: text.into(),
        });
    }

    pub fn print_error(&mut self, text: impl Into<String>) {
        self.lines.push(ConsoleLine {
            severity: ConsoleLineSeverity::Error,
            text: text.into(),
        });
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn has_errors(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.severity == ConsoleLineSeverity::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutputEntry {
    pub session_id: String,
    pub console: OutputConsole,
}

/// Registry of command outputs, keyed by the session that produced them.
/// Entries are kept in registration order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessesPanel {
    entries: Vec<CommandOutputEntry>,
}

impl ProcessesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command_output(&mut self, session_id: impl Into<String>, console: OutputConsole) {
        self.entries.push(CommandOutputEntry {
            session_id: session_id.into(),
            console,
        });
    }

    pub fn entries(&self) -> &[CommandOutputEntry] {
        &self.entries
    }

    pub fn entries_for_session<'a>(
        &'a self,
        session_id: &'a str,
    ) -> impl Iterator<Item = &'a CommandOutputEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.session_id == session_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
