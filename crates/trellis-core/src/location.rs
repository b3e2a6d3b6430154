//! Browser history / URL bar collaborator interface.

/// URL bar collaborator.
pub trait Location: Send + Sync {
    /// Begin managing the URL bar.
    fn start(&mut self, push_state: bool);

    /// Reflect a new URL.
    fn update(&mut self, url: &str);
}

/// In-memory location for tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    started: bool,
    push_state: bool,
    history: Vec<String>,
}

impl MemoryLocation {
    /// Create a stopped, empty location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `start` has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The latest URL reflected, if any.
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// All URLs reflected so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn start(&mut self, push_state: bool) {
        self.started = true;
        self.push_state = push_state;
    }

    fn update(&mut self, url: &str) {
        self.history.push(url.to_string());
    }
}
