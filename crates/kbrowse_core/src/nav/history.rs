/// Capability interface over the host environment's history stack.
///
/// The browser History API, a router library, or a plain in-memory stack can
/// all implement this; the state machine only ever pushes canonical URLs and
/// reads the current one back.
pub trait HistorySink {
    /// Pushes a new entry. Called on every transition, even when the target
    /// state equals the current one; each user action is a distinct entry.
    fn push_url(&mut self, url: &str);

    /// The URL of the entry currently pointed at.
    fn current_url(&self) -> &str;
}

/// In-memory history stack used by tests and the CLI driver.
///
/// Stepping back or forward moves the cursor without touching entries, the
/// way browser back/forward does; a push after stepping back drops the
/// forward entries.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            position: 0,
        }
    }

    /// Moves one entry back, returning the now-current URL. The caller feeds
    /// it to the session's popstate handler, mirroring a browser back.
    pub fn back(&mut self) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.entries[self.position].as_str())
    }

    /// Moves one entry forward, returning the now-current URL.
    pub fn forward(&mut self) -> Option<&str> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(self.entries[self.position].as_str())
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl HistorySink for MemoryHistory {
    fn push_url(&mut self, url: &str) {
        self.entries.truncate(self.position + 1);
        self.entries.push(url.to_string());
        self.position = self.entries.len() - 1;
    }

    fn current_url(&self) -> &str {
        &self.entries[self.position]
    }
}
