use crate::sink::DocumentSink;
use crate::sink::ScalarValue;
use crate::sink::ScopeKind;
use crate::sink::ScopeStack;
use crate::sink::SinkError;
use inherent::inherent;
use serde::Serialize;
use std::io::Write;

type Result<T> = std::result::Result<T, SinkError>;

/// A [`DocumentSink`] that streams compact JSON text into an
/// [`io::Write`](std::io::Write).
///
/// Nothing is buffered by the sink itself, so a failing writer surfaces as
/// [`SinkError::Io`] from whichever call hit it. After that the stream holds
/// a partial document, and every later call (including
/// [`finish`](Self::finish)) returns [`SinkError::WriterFailed`].
#[derive(Debug)]
pub struct JsonWriterSink<W: Write> {
    failed: bool,
    scopes: ScopeStack,
    writer: W,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            failed: false,
            scopes: ScopeStack::new(),
            writer,
        }
    }

    /// Consume this sink and return the underlying writer, provided exactly
    /// one root value was written and closed.
    pub fn finish(mut self) -> Result<W> {
        self.ensure_writable()?;
        self.scopes.check_complete()?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.failed {
            return Err(SinkError::WriterFailed);
        }
        Ok(())
    }

    /// Run one sink operation, refusing it if an earlier write failed and
    /// remembering any I/O failure it hits.
    fn guarded(&mut self, op: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.ensure_writable()?;
        let result = op(self);
        if let Err(SinkError::Io(_)) = &result {
            self.failed = true;
        }
        result
    }

    fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        // serde_json hands back the writer's own io::Error for I/O failures.
        serde_json::to_writer(&mut self.writer, value)
            .map_err(|e| SinkError::Io(e.into()))
    }

    fn write_entry_prefix(&mut self, has_sibling: bool, key: Option<&str>) -> Result<()> {
        if has_sibling {
            self.writer.write_all(b",")?;
        }
        if let Some(key) = key {
            self.encode(key)?;
            self.writer.write_all(b":")?;
        }
        Ok(())
    }

    fn open(&mut self, kind: ScopeKind, key: Option<&str>) -> Result<()> {
        let has_sibling = self.scopes.open(kind, key)?;
        self.write_entry_prefix(has_sibling, key)?;
        self.writer.write_all(match kind {
            ScopeKind::Array => b"[",
            ScopeKind::Object => b"{",
        })?;
        Ok(())
    }

    fn close(&mut self, kind: ScopeKind) -> Result<()> {
        self.scopes.close(kind)?;
        self.writer.write_all(match kind {
            ScopeKind::Array => b"]",
            ScopeKind::Object => b"}",
        })?;
        Ok(())
    }
}

#[inherent]
impl<W: Write> DocumentSink for JsonWriterSink<W> {
    pub fn start_object(&mut self, key: Option<&str>) -> Result<()> {
        self.guarded(|sink| sink.open(ScopeKind::Object, key))
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.guarded(|sink| sink.close(ScopeKind::Object))
    }

    pub fn start_array(&mut self, key: Option<&str>) -> Result<()> {
        self.guarded(|sink| sink.open(ScopeKind::Array, key))
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.guarded(|sink| sink.close(ScopeKind::Array))
    }

    pub fn field(&mut self, key: &str, value: ScalarValue<'_>) -> Result<()> {
        self.guarded(|sink| {
            let has_sibling = sink.scopes.field(key)?;
            sink.write_entry_prefix(has_sibling, Some(key))?;
            sink.encode(&value)
        })
    }
}
