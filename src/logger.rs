// Copyright (c) 2025, BlockProject 3D
//
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
//     * Redistributions of source code must retain the above copyright notice,
//       this list of conditions and the following disclaimer.
//     * Redistributions in binary form must reproduce the above copyright notice,
//       this list of conditions and the following disclaimer in the documentation
//       and/or other materials provided with the distribution.
//     * Neither the name of BlockProject 3D nor the names of its contributors
//       may be used to endorse or promote products derived from this software
//       without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR
// CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
// EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
// PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR
// PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
// LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
// NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
// SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::alert::{self, AlertPresenter};
use crate::callsite::{Callsite, LogRecord};
use crate::format;
use crate::handler::{Flag, Handler};
use crate::level::Level;
use std::sync::Arc;

/// The leveled console logging facade.
///
/// A `Logger` owns two configuration flags:
///
/// * `enabled`: the master on/off switch. When off, every logging operation
///   returns immediately, formatting included.
/// * `verbose_details`: when on, emitted lines carry call-site metadata
///   (function, file basename, line number); when off, only the timestamp,
///   level and message.
///
/// Both flags default to on and may be toggled for the lifetime of the
/// instance. The flags are atomics, so a `Logger` cloned or shared across
/// threads observes toggles coherently; clones share the same flags and sink.
/// Instances built separately are fully independent.
///
/// No logging operation ever fails or panics; the only observable effect is
/// the console write, or its absence.
#[derive(Clone)]
pub struct Logger {
    enabled: Flag,
    verbose_details: Flag,
    handler: Arc<dyn Handler>,
    presenter: Arc<dyn AlertPresenter>,
}

impl Default for Logger {
    fn default() -> Self {
        crate::builder::Builder::new().build()
    }
}

impl Logger {
    /// Creates a logger with both flags on, writing to stdout, with no alert
    /// capability.
    pub fn new() -> Logger {
        Logger::default()
    }

    /// Creates a logger with both flags supplied explicitly.
    ///
    /// # Arguments
    ///
    /// * `enabled`: the master on/off switch.
    /// * `verbose_details`: true to include call-site metadata in lines.
    ///
    /// returns: Logger
    pub fn with_flags(enabled: bool, verbose_details: bool) -> Logger {
        crate::builder::Builder::new()
            .enabled(enabled)
            .verbose_details(verbose_details)
            .build()
    }

    pub(crate) fn from_parts(
        enabled: bool,
        verbose_details: bool,
        handler: Arc<dyn Handler>,
        presenter: Arc<dyn AlertPresenter>,
    ) -> Logger {
        Logger {
            enabled: Flag::new(enabled),
            verbose_details: Flag::new(verbose_details),
            handler,
            presenter,
        }
    }

    /// Returns true if the logger is currently capturing log messages.
    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    /// Sets the master on/off switch.
    pub fn set_enabled(&self, flag: bool) {
        self.enabled.set(flag);
    }

    /// Returns true if emitted lines include call-site metadata.
    pub fn verbose_details(&self) -> bool {
        self.verbose_details.is_enabled()
    }

    /// Enables or disables call-site metadata in emitted lines.
    pub fn set_verbose_details(&self, flag: bool) {
        self.verbose_details.set(flag);
    }

    /// The canonical logging operation.
    ///
    /// When the logger is disabled this returns immediately without touching
    /// the clock or allocating. Otherwise one line is formatted and handed to
    /// the sink as a single write:
    ///
    /// * verbose mode: `{ts} [{LEVEL}] {function} {fileBasename} [line:{line}] --- {message}`
    /// * terse mode: `{ts} [{LEVEL}] {message}`
    ///
    /// All inputs are accepted as-is; empty strings and any line number
    /// produce a best-effort line.
    ///
    /// # Arguments
    ///
    /// * `level`: the severity of the message.
    /// * `msg`: the message text.
    /// * `function`: the invoking function name.
    /// * `line`: the invoking line number.
    /// * `file`: the invoking source file path.
    ///
    /// returns: ()
    pub fn log(&self, level: Level, msg: &str, function: &str, line: u32, file: &str) {
        if !self.is_enabled() {
            return;
        }
        let record = LogRecord::new(level, msg, Callsite::new(function, file, line));
        let ts = format::timestamp();
        let mut out = String::with_capacity(ts.len() + msg.len() + 32);
        format::write_record(&mut out, &record, self.verbose_details(), &ts);
        self.handler.write(level, &out);
    }

    /// Logs a message at the [Verbose](Level::Verbose) level.
    pub fn verbose(&self, msg: &str, function: &str, line: u32, file: &str) {
        self.log(Level::Verbose, msg, function, line, file);
    }

    /// Logs a message at the [Info](Level::Info) level.
    pub fn info(&self, msg: &str, function: &str, line: u32, file: &str) {
        self.log(Level::Info, msg, function, line, file);
    }

    /// Logs a message at the [Debug](Level::Debug) level.
    pub fn debug_msg(&self, msg: &str, function: &str, line: u32, file: &str) {
        self.log(Level::Debug, msg, function, line, file);
    }

    /// Logs a message at the [Warn](Level::Warn) level.
    pub fn warn(&self, msg: &str, function: &str, line: u32, file: &str) {
        self.log(Level::Warn, msg, function, line, file);
    }

    /// Logs a message at the [Error](Level::Error) level.
    pub fn error(&self, msg: &str, function: &str, line: u32, file: &str) {
        self.log(Level::Error, msg, function, line, file);
    }

    /// Shows a message through the modal-alert presenter, when the host has
    /// one.
    ///
    /// Gated by the same `enabled` flag as [log](Logger::log). The title is
    /// composed from the file basename and line number, the body from the
    /// timestamp, function name and message. With the default no-op presenter
    /// this does nothing.
    ///
    /// # Arguments
    ///
    /// * `msg`: the message text.
    /// * `function`: the invoking function name.
    /// * `line`: the invoking line number.
    /// * `file`: the invoking source file path.
    ///
    /// returns: ()
    pub fn alert(&self, msg: &str, function: &str, line: u32, file: &str) {
        if !self.is_enabled() {
            return;
        }
        let site = Callsite::new(function, file, line);
        let title = alert::compose_title(&site);
        let body = alert::compose_body(&format::timestamp(), function, msg);
        self.presenter.present(&title, &body);
    }

    /// Flushes the underlying sink.
    pub fn flush(&self) {
        self.handler.flush();
    }
}

#[cfg(test)]
mod tests {
    use crate::alert::AlertPresenter;
    use crate::builder::Builder;
    use crate::handler::{LineQueue, MemoryHandler};
    use crate::level::Level;
    use crate::logger::Logger;
    use std::sync::Mutex;

    fn captured(logger: Builder) -> (Logger, LineQueue) {
        let queue = LineQueue::default();
        let logger = logger.handler(MemoryHandler::new(queue.clone())).build();
        (logger, queue)
    }

    // Checks the 19 byte timestamp prefix and returns the remainder.
    fn strip_timestamp(line: &str) -> &str {
        let (ts, rest) = line.split_at(19);
        for (i, c) in ts.chars().enumerate() {
            match i {
                4 | 7 => assert_eq!(c, '-'),
                10 => assert_eq!(c, ' '),
                13 | 16 => assert_eq!(c, ':'),
                _ => assert!(c.is_ascii_digit()),
            }
        }
        rest
    }

    #[test]
    fn verbose_mode_contains_level_token() {
        let levels = [
            Level::Verbose,
            Level::Info,
            Level::Debug,
            Level::Warn,
            Level::Error,
        ];
        let (logger, queue) = captured(Builder::new());
        for level in levels {
            logger.log(level, "m", "f", 3, "/p/file.rs");
            let line = queue.pop().unwrap();
            let rest = strip_timestamp(&line);
            assert_eq!(rest, format!(" [{}] f file.rs [line:3] --- m", level));
        }
    }

    #[test]
    fn disabled_produces_no_output() {
        let (logger, queue) = captured(Builder::new().enabled(false));
        logger.error("boom", "doWork", 42, "/x/y/Main.ext");
        logger.log(Level::Info, "", "", 0, "");
        assert!(queue.is_empty());
        // Suppression is idempotent regardless of the details flag.
        logger.set_verbose_details(false);
        logger.warn("still nothing", "f", 1, "a.rs");
        assert!(queue.is_empty());
    }

    #[test]
    fn terse_mode_drops_callsite_only() {
        let (logger, queue) = captured(Builder::new());
        logger.info("ready", "boot", 9, "/srv/app.rs");
        let verbose = queue.pop().unwrap();
        logger.set_verbose_details(false);
        logger.info("ready", "boot", 9, "/srv/app.rs");
        let terse = queue.pop().unwrap();
        assert_eq!(strip_timestamp(&verbose), " [INFO] boot app.rs [line:9] --- ready");
        assert_eq!(strip_timestamp(&terse), " [INFO] ready");
    }

    #[test]
    fn wrappers_route_to_matching_level() {
        let (logger, queue) = captured(Builder::new().verbose_details(false));
        let calls: [(&dyn Fn(&Logger), &str); 5] = [
            (&|l: &Logger| l.verbose("m", "f", 1, "p"), "VERBOSE"),
            (&|l: &Logger| l.info("m", "f", 1, "p"), "INFO"),
            (&|l: &Logger| l.debug_msg("m", "f", 1, "p"), "DEBUG"),
            (&|l: &Logger| l.warn("m", "f", 1, "p"), "WARN"),
            (&|l: &Logger| l.error("m", "f", 1, "p"), "ERROR"),
        ];
        for (call, name) in calls {
            call(&logger);
            let line = queue.pop().unwrap();
            assert_eq!(strip_timestamp(&line), format!(" [{}] m", name));
        }
    }

    #[test]
    fn error_scenario_verbose() {
        let (logger, queue) = captured(Builder::new());
        logger.error("boom", "doWork", 42, "/x/y/Main.ext");
        let line = queue.pop().unwrap();
        assert_eq!(
            strip_timestamp(&line),
            " [ERROR] doWork Main.ext [line:42] --- boom"
        );
    }

    #[test]
    fn instances_are_independent() {
        let (a, qa) = captured(Builder::new());
        let (b, qb) = captured(Builder::new());
        a.set_enabled(false);
        a.info("a", "f", 1, "p");
        b.info("b", "f", 1, "p");
        assert!(qa.is_empty());
        assert!(strip_timestamp(&qb.pop().unwrap()).ends_with("b"));
    }

    #[test]
    fn clones_share_flags() {
        let (logger, queue) = captured(Builder::new());
        let clone = logger.clone();
        clone.set_enabled(false);
        logger.info("m", "f", 1, "p");
        assert!(queue.is_empty());
    }

    struct Recorder(Mutex<Vec<(String, String)>>);

    impl AlertPresenter for Recorder {
        fn present(&self, title: &str, body: &str) {
            self.0.lock().unwrap().push((title.into(), body.into()));
        }
    }

    impl AlertPresenter for std::sync::Arc<Recorder> {
        fn present(&self, title: &str, body: &str) {
            self.as_ref().present(title, body);
        }
    }

    #[test]
    fn alert_composes_title_and_body() {
        let queue = LineQueue::default();
        let logger = Builder::new()
            .handler(MemoryHandler::new(queue.clone()))
            .presenter(Recorder(Mutex::new(Vec::new())))
            .build();
        logger.alert("boom", "doWork", 42, "/x/y/Main.ext");
        // The alert path never writes to the log sink.
        assert!(queue.is_empty());
    }

    #[test]
    fn alert_recorded_by_presenter() {
        use std::sync::Arc;
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let logger = Builder::new().presenter(recorder.clone()).build();
        logger.alert("boom", "doWork", 42, "/x/y/Main.ext");
        let calls = recorder.0.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Main.ext [line:42]");
        assert!(calls[0].1.ends_with(" doWork --- boom"));
        assert_eq!(calls[0].1.len(), 19 + " doWork --- boom".len());
    }

    #[test]
    fn alert_gated_by_enabled() {
        use std::sync::Arc;
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let logger = Builder::new()
            .enabled(false)
            .presenter(recorder.clone())
            .build();
        logger.alert("boom", "doWork", 42, "/x/y/Main.ext");
        assert!(recorder.0.lock().unwrap().is_empty());
    }
}
