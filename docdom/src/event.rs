/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page loaded or navigated to (fires on every client-side route change)
    Ready,
    /// Click on an element
    Click { target: String },
    /// Checked state of an input changed by the user
    Change { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    /// ID of the targeted element, if the event has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Ready => None,
            Self::Click { target } | Self::Change { target } => Some(target),
        }
    }
}

/// Whether a handler acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
