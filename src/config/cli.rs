use crate::core::Sink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes rendered output to stdout, one trailing newline per write.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_output(&self, data: &str) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", data)?;
        out.flush()?;
        Ok(())
    }
}
