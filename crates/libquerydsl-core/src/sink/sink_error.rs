use crate::sink::ScopeKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failure while writing to the underlying document stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Values written inside an object must be given a key.")]
    KeyRequired,

    #[error(
        "The key `{key}` was given for a value written at the document root \
        or inside an array, where values are unkeyed."
    )]
    KeyNotAllowed {
        key: String,
    },

    #[error("The key `{key}` was already written in the enclosing object.")]
    DuplicateKey {
        key: String,
    },

    #[error("The scalar field `{key}` must be written directly inside an object.")]
    FieldOutsideObject {
        key: String,
    },

    #[error("`{operation}` was called, but there is no open object or array to close.")]
    NoOpenScope {
        operation: &'static str,
    },

    #[error("Attempted to close an {expected}, but the innermost open scope is an {found}.")]
    MismatchedClose {
        expected: ScopeKind,
        found: ScopeKind,
    },

    #[error(
        "An earlier write to the underlying stream failed, so the document \
        can no longer be completed."
    )]
    WriterFailed,

    #[error("The document already holds a complete root value.")]
    DocumentAlreadyComplete,

    #[error("The document is incomplete: {depth} object(s) or array(s) are still open.")]
    UnclosedScopes {
        depth: usize,
    },

    #[error("Nothing was written to the document.")]
    EmptyDocument,
}
