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

//! A minimal leveled console logging facade.
//!
//! Each message is tagged with one of five severities, stamped with the local
//! time and written as one line to standard output, optionally carrying
//! call-site metadata (function, file basename, line number).
//!
//! # Examples
//!
//! Direct use of a [Logger](Logger) instance:
//! ```
//! use conlog::Logger;
//!
//! fn main() {
//!     let logger = Logger::new();
//!     logger.info("service ready", "main", line!(), file!());
//!     logger.set_verbose_details(false);
//!     logger.warn("terse from here on", "main", line!(), file!());
//! }
//! ```
//!
//! Call-site capture through the macros (the global default logger is used
//! unless one is named with `logger:`):
//! ```
//! use conlog::{info, error, Builder};
//!
//! fn main() {
//!     info!("listening on {}", 8080);
//!     let logger = Builder::new().verbose_details(false).build();
//!     error!(logger: logger, "bind failed: {}", "EADDRINUSE");
//! }
//! ```

// The usage examples above require some context (a main function) to not be
// confusing, which trips this lint.
#![allow(clippy::needless_doctest_main)]

pub mod alert;
mod builder;
mod callsite;
mod easy_termcolor;
mod format;
pub mod handler;
mod level;
mod logger;

use once_cell::sync::Lazy;

pub use builder::Builder;
pub use callsite::{Callsite, LogRecord};
pub use handler::Colors;
pub use level::Level;
pub use logger::Logger;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Returns the global default logger used by the macros when no instance is
/// named.
///
/// The instance is created on first use with both flags on; its flags may be
/// toggled like any other logger's.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Expands to the path of the enclosing function.
///
/// This is the portable stand-in for compile-time call-site introspection:
/// the name is recovered from the type name of a local item, so it includes
/// the full module path.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f" added by the local item.
        &name[..name.len() - 3]
    }};
}

/// Logs a message at an explicit level, capturing the call site.
///
/// Accepts an optional `logger:` argument naming the [Logger](Logger)
/// instance to use; the [global](global) logger is used otherwise.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $lvl:expr, $($arg:tt)+) => {
        $logger.log($lvl, &format!($($arg)+), $crate::__function!(), line!(), file!())
    };
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $lvl, $($arg)+)
    };
}

/// Logs a message at the verbose level, capturing the call site.
#[macro_export]
macro_rules! verbose {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Verbose, $($arg)+)
    };
}

/// Logs a message at the info level, capturing the call site.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Logs a message at the debug level, capturing the call site.
#[macro_export]
macro_rules! debug_msg {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Logs a message at the warn level, capturing the call site.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Logs a message at the error level, capturing the call site.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Shows a message through the modal-alert presenter, capturing the call
/// site.
#[macro_export]
macro_rules! alert {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.alert(&format!($($arg)+), $crate::__function!(), line!(), file!())
    };
    ($($arg:tt)+) => {
        $crate::alert!(logger: $crate::global(), $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::handler::{LineQueue, MemoryHandler};
    use crate::Builder;

    #[test]
    fn macros_capture_callsite() {
        let queue = LineQueue::default();
        let logger = Builder::new()
            .handler(MemoryHandler::new(queue.clone()))
            .build();
        crate::info!(logger: logger, "up in {}ms", 12);
        let line = queue.pop().unwrap();
        assert!(line.contains("[INFO]"));
        assert!(line.contains("conlog::tests::macros_capture_callsite"));
        assert!(line.contains("lib.rs"));
        assert!(line.ends_with("--- up in 12ms"));
    }

    #[test]
    fn level_macros_route() {
        let queue = LineQueue::default();
        let logger = Builder::new()
            .verbose_details(false)
            .handler(MemoryHandler::new(queue.clone()))
            .build();
        crate::verbose!(logger: logger, "v");
        crate::debug_msg!(logger: logger, "d");
        crate::warn!(logger: logger, "w");
        crate::error!(logger: logger, "e");
        let tokens: Vec<String> = std::iter::from_fn(|| queue.pop())
            .map(|l| l[20..].to_string())
            .collect();
        assert_eq!(tokens, ["[VERBOSE] v", "[DEBUG] d", "[WARN] w", "[ERROR] e"]);
    }

    #[test]
    fn function_capture_strips_local_item() {
        let name = crate::__function!();
        assert!(name.ends_with("function_capture_strips_local_item"));
        assert!(!name.ends_with("::f"));
    }

    #[test]
    fn global_logger_is_shared() {
        assert!(std::ptr::eq(crate::global(), crate::global()));
    }
}
