use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(error: anyhow::Error) -> Self {
        ApplicationError::Unexpected(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    Forbidden,
    NotFound,
    Invalid,
    Conflict,
}

/// Implemented by every decide error so handlers can surface it with the
/// right application error variant.
pub trait Rejection: std::error::Error {
    fn kind(&self) -> RejectionKind;
}

impl ApplicationError {
    pub fn rejected<R: Rejection>(reason: R) -> Self {
        let message = reason.to_string();
        match reason.kind() {
            RejectionKind::Forbidden => ApplicationError::Forbidden(message),
            RejectionKind::NotFound => ApplicationError::NotFound(message),
            RejectionKind::Invalid => ApplicationError::Validation(message),
            RejectionKind::Conflict => ApplicationError::Domain(message),
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Error)]
    enum SampleError {
        #[error("nope")]
        Nope,
        #[error("gone")]
        Gone,
        #[error("busy")]
        Busy,
        #[error("bad")]
        Bad,
    }

    impl Rejection for SampleError {
        fn kind(&self) -> RejectionKind {
            match self {
                SampleError::Nope => RejectionKind::Forbidden,
                SampleError::Gone => RejectionKind::NotFound,
                SampleError::Busy => RejectionKind::Conflict,
                SampleError::Bad => RejectionKind::Invalid,
            }
        }
    }

    #[rstest]
    fn it_should_map_rejections_by_kind() {
        assert!(matches!(
            ApplicationError::rejected(SampleError::Nope),
            ApplicationError::Forbidden(message) if message == "nope"
        ));
        assert!(matches!(
            ApplicationError::rejected(SampleError::Gone),
            ApplicationError::NotFound(_)
        ));
        assert!(matches!(
            ApplicationError::rejected(SampleError::Busy),
            ApplicationError::Domain(_)
        ));
        assert!(matches!(
            ApplicationError::rejected(SampleError::Bad),
            ApplicationError::Validation(_)
        ));
    }

    #[rstest]
    fn it_should_wrap_backend_errors() {
        let error: ApplicationError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(error.to_string(), "unexpected: disk on fire");
    }
}
