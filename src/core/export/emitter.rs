//! Event emission
//!
//! Each event is written as one JSON document followed by a newline.

use crate::domain::{EmitError, OutputEvent};
use std::io::Write;

/// Writes output events to a sink, counting them
pub struct Emitter<W: Write> {
    writer: W,
    emitted: u64,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter over a writer
    pub fn new(writer: W) -> Self {
        Self { writer, emitted: 0 }
    }

    /// Serialize and write one event
    ///
    /// The line is serialized in full before anything is written, so a
    /// serialization failure never leaves a partial line in the sink.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError`] if serialization or the write fails.
    pub fn emit(&mut self, event: &OutputEvent) -> Result<(), EmitError> {
        let mut line = serde_json::to_vec(event)
            .map_err(|e| EmitError::SerializationFailed(e.to_string()))?;
        line.push(b'\n');

        self.writer.write_all(&line)?;
        self.emitted += 1;
        Ok(())
    }

    /// Flush buffered output to the sink
    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of events written so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Consume the emitter and return the sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BranchId, ProductId};
    use std::io;

    fn event(branch: i64) -> OutputEvent {
        OutputEvent {
            branch_id: BranchId::new(branch),
            product_id: ProductId::new(1),
            campaigns: Vec::new(),
            book_price: None,
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_writes_one_line_per_event() {
        let mut emitter = Emitter::new(Vec::new());
        emitter.emit(&event(1)).unwrap();
        emitter.emit(&event(2)).unwrap();

        assert_eq!(emitter.emitted(), 2);
        let output = String::from_utf8(emitter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"filial":1,"produto":1,"campanhas":[],"precoLivro":null}"#,
                r#"{"filial":2,"produto":1,"campanhas":[],"precoLivro":null}"#,
            ]
        );
    }

    #[test]
    fn test_write_failure_is_not_counted() {
        let mut emitter = Emitter::new(FailingWriter);

        let err = emitter.emit(&event(1)).unwrap_err();
        assert!(matches!(err, EmitError::WriteFailed(_)));
        assert_eq!(emitter.emitted(), 0);
    }
}
