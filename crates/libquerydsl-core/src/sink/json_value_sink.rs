use crate::sink::DocumentSink;
use crate::sink::ScalarValue;
use crate::sink::ScopeKind;
use crate::sink::ScopeStack;
use crate::sink::SinkError;
use inherent::inherent;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug)]
struct Frame {
    key: Option<String>,
    value: Value,
}

/// A [`DocumentSink`] that assembles an in-memory [`serde_json::Value`].
///
/// Object keys keep the order in which they were written.
#[derive(Debug, Default)]
pub struct JsonValueSink {
    frames: Vec<Frame>,
    root: Option<Value>,
    scopes: ScopeStack,
}

impl JsonValueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this sink to produce the finished document.
    pub fn into_value(self) -> Result<Value> {
        self.scopes.check_complete()?;
        self.root.ok_or(SinkError::EmptyDocument)
    }

    fn open(&mut self, kind: ScopeKind, key: Option<&str>) -> Result<()> {
        self.scopes.open(kind, key)?;
        self.frames.push(Frame {
            key: key.map(str::to_string),
            value: match kind {
                ScopeKind::Array => Value::Array(vec![]),
                ScopeKind::Object => Value::Object(Map::new()),
            },
        });
        Ok(())
    }

    fn close(&mut self, kind: ScopeKind) -> Result<()> {
        self.scopes.close(kind)?;
        let Some(Frame { key, value }) = self.frames.pop() else {
            // `scopes` and `frames` are pushed and popped together.
            unreachable!("an open scope always has a frame")
        };
        self.attach(key, value);
        Ok(())
    }

    /// Place a finished value into the innermost open frame, or make it the
    /// document root if no frame is open. `ScopeStack` has already checked
    /// that `key` is present exactly when the parent is an object.
    fn attach(&mut self, key: Option<String>, value: Value) {
        match (self.frames.last_mut(), key) {
            (None, _) => self.root = Some(value),

            (Some(Frame { value: Value::Object(map), .. }), Some(key)) => {
                map.insert(key, value);
            },

            (Some(Frame { value: Value::Array(items), .. }), _) =>
                items.push(value),

            (Some(_), _) =>
                unreachable!("frames only ever hold objects and arrays"),
        }
    }
}

#[inherent]
impl DocumentSink for JsonValueSink {
    pub fn start_object(&mut self, key: Option<&str>) -> Result<()> {
        self.open(ScopeKind::Object, key)
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.close(ScopeKind::Object)
    }

    pub fn start_array(&mut self, key: Option<&str>) -> Result<()> {
        self.open(ScopeKind::Array, key)
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.close(ScopeKind::Array)
    }

    pub fn field(&mut self, key: &str, value: ScalarValue<'_>) -> Result<()> {
        self.scopes.field(key)?;
        self.attach(Some(key.to_string()), value.into());
        Ok(())
    }
}
