use crate::session::EmailDraft;
use thiserror::Error;

/// Outbound mail delivery is a black box with a two-outcome contract. The
/// reason string, when present, is surfaced verbatim in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Rejected(String),
    #[error("Unknown error")]
    Unknown,
}

/// Accepts a finalized draft and either delivers it or says why not.
pub trait Transport {
    fn send(&self, draft: &EmailDraft) -> Result<(), TransportError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;

    /// Records every draft it is handed; outcome is fixed at construction.
    pub struct MockTransport {
        pub sent: RefCell<Vec<EmailDraft>>,
        pub outcome: Result<(), TransportError>,
    }

    impl MockTransport {
        pub fn succeeding() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                outcome: Ok(()),
            }
        }

        pub fn failing(reason: &str) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                outcome: Err(TransportError::Rejected(reason.to_string())),
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&self, draft: &EmailDraft) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(draft.clone());
            self.outcome.clone()
        }
    }
}
