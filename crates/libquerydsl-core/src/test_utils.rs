use std::io::Write;

/// A writer that accepts `budget` bytes and then fails every write with
/// [`std::io::ErrorKind::BrokenPipe`].
pub(crate) struct FailingWriter {
    budget: usize,
    pub written: Vec<u8>,
}
impl FailingWriter {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            written: vec![],
        }
    }
}
impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.budget == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "writer closed",
            ));
        }
        let len = buf.len().min(self.budget);
        self.budget -= len;
        self.written.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
