use crate::sink::ScalarValue;
use crate::sink::SinkError;

type Result<T> = std::result::Result<T, SinkError>;

/// A structured-document writer that query builders serialize into.
///
/// Values written inside an object must be keyed; values written at the
/// document root or inside an array must not be. Every `start_*` call must be
/// matched by exactly one later `end_*` call of the same kind. Prefer the
/// scoped `write_object` and `write_array` helpers, which guarantee that.
pub trait DocumentSink {
    fn start_object(&mut self, key: Option<&str>) -> Result<()>;

    fn end_object(&mut self) -> Result<()>;

    fn start_array(&mut self, key: Option<&str>) -> Result<()>;

    fn end_array(&mut self) -> Result<()>;

    fn field(&mut self, key: &str, value: ScalarValue<'_>) -> Result<()>;
}

impl<'s> dyn DocumentSink + 's {
    /// Open an object, run `body` to fill it, then close it.
    ///
    /// The object is closed whether or not `body` succeeds. If both `body`
    /// and the close fail, the error from `body` is returned.
    pub fn write_object(
        &mut self,
        key: Option<&str>,
        body: impl FnOnce(&mut (dyn DocumentSink + 's)) -> Result<()>,
    ) -> Result<()> {
        self.start_object(key)?;
        let written = body(&mut *self);
        let closed = self.end_object();
        written.and(closed)
    }

    /// Open an array, run `body` to fill it, then close it.
    ///
    /// Closing follows the same rules as `write_object`.
    pub fn write_array(
        &mut self,
        key: Option<&str>,
        body: impl FnOnce(&mut (dyn DocumentSink + 's)) -> Result<()>,
    ) -> Result<()> {
        self.start_array(key)?;
        let written = body(&mut *self);
        let closed = self.end_array();
        written.and(closed)
    }
}
