// Output Log
// Timestamped one-line messages for the extension output channel

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Mutex;

use super::app_config::compiled;

/// Format one log line: `[<app> :: <timestamp>] => <message>`
pub fn format_line<Tz>(app_name: &str, time: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "[{} :: {}] => {}",
        app_name,
        time.format(compiled::TIMESTAMP_FORMAT),
        message
    )
}

/// Write-only log sink. Write failures are dropped so logging never
/// interferes with the caller.
pub struct OutputLog {
    app_name: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl OutputLog {
    pub fn new(app_name: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            app_name: app_name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Log to stderr under the compiled application name
    pub fn stderr() -> Self {
        Self::new(compiled::APP_NAME, Box::new(io::stderr()))
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn log(&self, message: impl AsRef<str>) {
        let line = format_line(&self.app_name, &Local::now(), message.as_ref());

        let Ok(mut writer) = self.writer.lock() else {
            tracing::trace!("output log writer poisoned");
            return;
        };

        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            tracing::trace!(error = %e, "output log write failed");
        }
    }
}

impl std::fmt::Debug for OutputLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputLog")
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;

    /// Writer that shares its buffer with the test
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_format_line() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(
            format_line("vs-deploy", &time, "deployed 3 files"),
            "[vs-deploy :: 2024-03-05 07:08:09] => deployed 3 files"
        );
    }

    #[test]
    fn test_log_writes_one_line() {
        let buf = SharedBuf::default();
        let log = OutputLog::new("picker", Box::new(buf.clone()));
        log.log("hello");

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(written.starts_with("[picker :: "));
        assert!(written.ends_with("] => hello\n"));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_stderr_uses_compiled_name() {
        assert_eq!(OutputLog::stderr().app_name(), compiled::APP_NAME);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let log = OutputLog::new("picker", Box::new(FailingWriter));
        log.log("ignored");
    }
}
