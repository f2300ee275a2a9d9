use crate::normalize::NewsView;

/// Where the displayed entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The persisted active entry served by the query service.
    Static,
    /// A freshly generated entry from triggering the workflow webhook.
    Dynamic,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Static => "static",
            Source::Dynamic => "dynamic",
        }
    }
}

/// The display state machine: one tagged value instead of loose flags, so
/// impossible combinations cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    /// `entry: None` is the explicit empty-store placeholder, not an error.
    Loaded {
        entry: Option<NewsView>,
        source: Source,
        updated_at: String,
    },
    Errored {
        message: String,
    },
}

/// Identifies one issued request. Completions carrying anything but the
/// most recent token are discarded, so an old in-flight response can never
/// overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub struct Display {
    state: DisplayState,
    issued: u64,
}

impl Display {
    pub fn new() -> Self {
        Self {
            state: DisplayState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DisplayState::Loading)
    }

    /// Enter `Loading` and issue a new request token. A later `begin`
    /// supersedes every token issued before it.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = DisplayState::Loading;
        RequestToken(self.issued)
    }

    /// Apply a request outcome. Returns `false` and changes nothing when
    /// the token is not the most recent issued.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<NewsView>, String>,
        source: Source,
        updated_at: String,
    ) -> bool {
        if token.0 != self.issued {
            return false;
        }

        self.state = match outcome {
            Ok(entry) => DisplayState::Loaded {
                entry,
                source,
                updated_at,
            },
            Err(message) => DisplayState::Errored { message },
        };
        true
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
