//! `tracing` output delivered one line per event to a sink such as the
//! browser console.

use std::io;

use tracing_subscriber::fmt::MakeWriter;

pub type LineSink = fn(&str);

#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: LineSink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

/// Buffers one formatted event and hands it to the sink when dropped.
pub struct ConsoleLine {
    sink: LineSink,
    buf: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            sink: self.sink,
            buf: Vec::new(),
        }
    }
}

/// Plain-text subscriber at `INFO`, without timestamps (no clock on wasm32).
pub fn subscriber(sink: LineSink) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(sink))
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .finish()
}
