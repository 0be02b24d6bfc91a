use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Destination for builtin output.
///
/// The control state writes through these so tests can capture what a
/// builtin printed without touching the real standard streams.
#[derive(Debug, Clone, Default)]
pub enum OutputSink {
    #[default]
    Stdout,
    Stderr,
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl OutputSink {
    /// Create a buffer-backed sink and return it with a handle to its contents.
    pub fn buffer() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        (OutputSink::Buffer(buffer.clone()), buffer)
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout => io::stdout().write(buf),
            OutputSink::Stderr => io::stderr().write(buf),
            OutputSink::Buffer(buffer) => buffer.borrow_mut().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().flush(),
            OutputSink::Stderr => io::stderr().flush(),
            OutputSink::Buffer(_) => Ok(()),
        }
    }
}

/// The pair of streams a command writes to.
#[derive(Debug, Clone)]
pub struct Streams {
    pub out: OutputSink,
    pub err: OutputSink,
}

impl Streams {
    /// Standard output and standard error of the shell process.
    pub fn standard() -> Self {
        Self {
            out: OutputSink::Stdout,
            err: OutputSink::Stderr,
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl Default for Streams {
    fn default() -> Self {
        Self::standard()
    }
}
