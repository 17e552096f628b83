// Console: the line sink every pattern writes its message to.
// Stdout for the binary, an in-memory transcript for tests and callers.

/// Line-oriented output. One call, one line.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    fn line(&mut self, text: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingConsole {
    lines: Vec<String>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
