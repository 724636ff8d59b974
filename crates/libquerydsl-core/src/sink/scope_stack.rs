use crate::sink::SinkError;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SinkError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Array,
    Object,
}
impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

#[derive(Clone, Debug)]
struct Scope {
    keys: HashSet<String>,
    kind: ScopeKind,
    len: usize,
}

/// Tracks the objects and arrays a sink currently has open and rejects
/// writes that would produce a malformed document.
///
/// Each successful `open_*`/`field` call reports whether the new entry
/// follows a sibling in the same scope, which streaming sinks use to decide
/// where separators go. Keys must be unique within each object.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScopeStack {
    root_started: bool,
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that the document holds exactly one fully closed root value.
    pub fn check_complete(&self) -> Result<()> {
        if !self.scopes.is_empty() {
            return Err(SinkError::UnclosedScopes {
                depth: self.scopes.len(),
            });
        }
        if !self.root_started {
            return Err(SinkError::EmptyDocument);
        }
        Ok(())
    }

    pub fn open(&mut self, kind: ScopeKind, key: Option<&str>) -> Result<bool> {
        let has_sibling = self.claim_slot(key)?;
        if self.scopes.is_empty() {
            self.root_started = true;
        }
        self.scopes.push(Scope {
            keys: HashSet::new(),
            kind,
            len: 0,
        });
        Ok(has_sibling)
    }

    pub fn close(&mut self, kind: ScopeKind) -> Result<()> {
        let innermost = self.scopes.last().ok_or(SinkError::NoOpenScope {
            operation: match kind {
                ScopeKind::Array => "end_array",
                ScopeKind::Object => "end_object",
            },
        })?;

        if innermost.kind != kind {
            return Err(SinkError::MismatchedClose {
                expected: kind,
                found: innermost.kind,
            });
        }

        self.scopes.pop();
        Ok(())
    }

    pub fn field(&mut self, key: &str) -> Result<bool> {
        match self.scopes.last() {
            Some(Scope { kind: ScopeKind::Object, .. }) =>
                self.claim_slot(Some(key)),

            Some(Scope { kind: ScopeKind::Array, .. }) | None =>
                Err(SinkError::FieldOutsideObject {
                    key: key.to_string(),
                }),
        }
    }

    fn claim_slot(&mut self, key: Option<&str>) -> Result<bool> {
        let Some(scope) = self.scopes.last_mut() else {
            return match key {
                Some(key) => Err(SinkError::KeyNotAllowed {
                    key: key.to_string(),
                }),
                None if self.root_started => Err(SinkError::DocumentAlreadyComplete),
                None => Ok(false),
            };
        };

        match (scope.kind, key) {
            (ScopeKind::Object, None) => return Err(SinkError::KeyRequired),
            (ScopeKind::Array, Some(key)) => return Err(SinkError::KeyNotAllowed {
                key: key.to_string(),
            }),
            (ScopeKind::Object, Some(key)) => {
                if !scope.keys.insert(key.to_string()) {
                    return Err(SinkError::DuplicateKey {
                        key: key.to_string(),
                    });
                }
            },
            (ScopeKind::Array, None) => (),
        }

        let has_sibling = scope.len > 0;
        scope.len += 1;
        Ok(has_sibling)
    }
}
