use crate::sink::DocumentSink;
use crate::sink::JsonValueSink;
use crate::sink::JsonWriterSink;
use crate::sink::SinkError;

type Result<T> = std::result::Result<T, SinkError>;

/// A single node of a query expression that knows how to serialize itself.
///
/// Implementors write exactly one fragment keyed by [`name`](Self::name)
/// into whichever object the sink currently has open. Because callers only
/// ever go through this trait, compound nodes can hold any mix of node types
/// as `Box<dyn QueryBuilder>`, and new node types can be added without
/// touching existing ones.
pub trait QueryBuilder: std::fmt::Debug {
    /// The key this node's fragment is written under, and which a parser
    /// would dispatch on. Must be unique across all node types.
    fn name(&self) -> &'static str;

    /// Write this node's fragment into the currently open object of `sink`.
    ///
    /// Errors raised by the sink are returned unchanged. Any object or array
    /// opened by this call is closed again before it returns.
    fn serialize_into(&self, sink: &mut dyn DocumentSink) -> Result<()>;

    /// Serialize this node as a standalone document, e.g.
    /// `{"missing":{"field":"age"}}`.
    fn to_json_value(&self) -> Result<serde_json::Value> {
        let mut value_sink = JsonValueSink::new();
        let sink: &mut dyn DocumentSink = &mut value_sink;
        sink.write_object(None, |sink| self.serialize_into(sink))?;
        value_sink.into_value()
    }

    /// Like [`to_json_value`](Self::to_json_value), but rendered as compact
    /// JSON text.
    fn to_json_string(&self) -> Result<String> {
        let mut writer_sink = JsonWriterSink::new(vec![]);
        let sink: &mut dyn DocumentSink = &mut writer_sink;
        sink.write_object(None, |sink| self.serialize_into(sink))?;
        let bytes = writer_sink.finish()?;
        String::from_utf8(bytes).map_err(|e| {
            SinkError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl std::fmt::Display for dyn QueryBuilder + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = self.to_json_string().map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
