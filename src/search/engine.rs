use crate::models::{Message, NavDirection, SearchState};

type MatchListener = Box<dyn FnMut(usize)>;

/// Indices of messages whose sender or content contains `query`, ignoring case.
///
/// Results are ascending by message index. An empty query matches nothing.
pub fn find_matches(messages: &[Message], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let lowercase_query = query.to_lowercase();
    let mut indices: Vec<usize> = messages
        .iter()
        .filter(|message| message.matches_lowercase(&lowercase_query))
        .map(|message| message.index)
        .collect();
    // Parser output is already ordered; this keeps the guarantee for hand-built lists
    indices.sort_unstable();
    indices
}

/// Search state machine over an immutable message list
pub struct SearchEngine {
    messages: Vec<Message>,
    state: SearchState,
    listeners: Vec<MatchListener>,
}

impl SearchEngine {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages, state: SearchState::inactive(), listeners: Vec::new() }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Index of the message under the cursor
    pub fn current_match(&self) -> Option<usize> {
        self.state.current_match()
    }

    /// Register a callback fired with the message index whenever a match becomes current
    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Swap in a freshly parsed list; the previous list and search state are discarded
    pub fn load(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.state = SearchState::inactive();
    }

    /// Run `query` from scratch. The first match, if any, becomes current.
    pub fn search(&mut self, query: &str) -> &SearchState {
        if query.is_empty() {
            self.state = SearchState::inactive();
            return &self.state;
        }

        self.state = SearchState {
            query: query.to_string(),
            match_indices: find_matches(&self.messages, query),
            cursor: 0,
            active: true,
        };

        if let Some(index) = self.state.current_match() {
            self.notify(index);
        }
        &self.state
    }

    /// Move the cursor one match in `direction`, wrapping at both ends
    pub fn navigate(&mut self, direction: NavDirection) -> &SearchState {
        let len = self.state.match_indices.len();
        if len == 0 {
            return &self.state;
        }

        self.state.cursor = match direction {
            NavDirection::Next => (self.state.cursor + 1) % len,
            NavDirection::Previous => (self.state.cursor + len - 1) % len,
        };

        if let Some(index) = self.state.current_match() {
            self.notify(index);
        }
        &self.state
    }

    pub fn clear(&mut self) -> &SearchState {
        self.search("")
    }

    fn notify(&mut self, index: usize) {
        for listener in &mut self.listeners {
            listener(index);
        }
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("messages", &self.messages.len())
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
