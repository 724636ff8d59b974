mod document_sink;
mod json_value_sink;
mod json_writer_sink;
mod scalar_value;
mod scope_stack;
mod sink_error;

pub use document_sink::DocumentSink;
pub use json_value_sink::JsonValueSink;
pub use json_writer_sink::JsonWriterSink;
pub use scalar_value::ScalarValue;
pub use scope_stack::ScopeKind;
pub(crate) use scope_stack::ScopeStack;
pub use sink_error::SinkError;

#[cfg(test)]
mod tests;
