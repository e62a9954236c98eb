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

use crate::alert::{AlertPresenter, NoopPresenter};
use crate::handler::{Colors, Handler, StdHandler};
use crate::logger::Logger;
use std::sync::Arc;

/// The base logger builder/initializer.
///
/// # Examples
///
/// The following example shows basic initialization of this logger.
/// ```
/// use conlog::Builder;
///
/// fn main() {
///     let logger = Builder::new().verbose_details(false).build();
///     logger.info("Example message", "main", line!(), file!());
/// }
/// ```
///
/// The following example shows initialization of this logger with a capture queue.
/// ```
/// use conlog::handler::{LineQueue, MemoryHandler};
/// use conlog::Builder;
///
/// fn main() {
///     let queue = LineQueue::default();
///     let logger = Builder::new()
///         .handler(MemoryHandler::new(queue.clone()))
///         .build();
///     logger.info("Example message", "main", line!(), file!());
///     let line = queue.pop().unwrap(); // Capture the last log line.
///     // We can't test for equality because log lines contain a timestamp...
///     assert!(line.ends_with("Example message"));
/// }
/// ```
pub struct Builder {
    pub(crate) enabled: bool,
    pub(crate) verbose_details: bool,
    pub(crate) colors: Colors,
    pub(crate) handler: Option<Arc<dyn Handler>>,
    pub(crate) presenter: Option<Arc<dyn AlertPresenter>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            enabled: true,
            verbose_details: true,
            colors: Colors::default(),
            handler: None,
            presenter: None,
        }
    }
}

impl Builder {
    /// Creates a new instance of a logger builder.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Sets the master on/off switch.
    ///
    /// The default for this flag is true.
    pub fn enabled(mut self, flag: bool) -> Self {
        self.enabled = flag;
        self
    }

    /// Enables or disables call-site metadata in emitted lines.
    ///
    /// The default for this flag is true.
    pub fn verbose_details(mut self, flag: bool) -> Self {
        self.verbose_details = flag;
        self
    }

    /// Sets the colors state when logging to stdout.
    ///
    /// The default behavior is to disable colors. Ignored when a custom
    /// handler is installed.
    pub fn colors(mut self, state: Colors) -> Self {
        self.colors = state;
        self
    }

    /// Installs a custom sink in place of the default stdout handler.
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Installs a modal-alert presenter.
    ///
    /// Hosts without a modal-dialog capability keep the default no-op
    /// presenter.
    pub fn presenter<P: AlertPresenter + 'static>(mut self, presenter: P) -> Self {
        self.presenter = Some(Arc::new(presenter));
        self
    }

    /// Builds the [Logger](Logger) with this current configuration.
    pub fn build(self) -> Logger {
        let colors = self.colors;
        let handler = self
            .handler
            .unwrap_or_else(|| Arc::new(StdHandler::new(colors)));
        let presenter = self.presenter.unwrap_or_else(|| Arc::new(NoopPresenter));
        Logger::from_parts(self.enabled, self.verbose_details, handler, presenter)
    }
}
