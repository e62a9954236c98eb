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

use crate::easy_termcolor::{color, EasyTermColor};
use crate::handler::Handler;
use crate::level::Level;
use std::io::{IsTerminal, Write};
use termcolor::{ColorChoice, StandardStream};

/// Enum of the different color settings when printing to stdout.
#[derive(Debug, Copy, Clone)]
pub enum Colors {
    /// Color printing is always enabled.
    Enabled,

    /// Color printing is always disabled.
    Disabled,

    /// Color printing is automatic (if current terminal is a tty, print with colors, otherwise
    /// print without colors).
    Auto,
}

impl Default for Colors {
    fn default() -> Self {
        Self::Disabled
    }
}

/// A simple stdout handler.
///
/// Standard output is the sole destination; with colors disabled (the
/// default) emitted lines are byte-exact with respect to the documented
/// format. The level token is colorized when colors are on.
pub struct StdHandler {
    colors: Colors,
}

impl StdHandler {
    /// Creates a new [StdHandler](StdHandler).
    ///
    /// # Arguments
    ///
    /// * `colors`: the printing color policy.
    ///
    /// returns: StdHandler
    pub fn new(colors: Colors) -> StdHandler {
        StdHandler { colors }
    }

    fn write_colored(&self, level: Level, line: &str) {
        // The level token is the bracketed segment right after the 19 byte
        // timestamp; split the line around it so only the token is colored.
        let stream = StandardStream::stdout(ColorChoice::Always);
        let token = format!("[{}]", level);
        match line.find(&token) {
            Some(pos) => {
                EasyTermColor(stream)
                    .write(&line[..pos])
                    .color(color(level))
                    .write(&token)
                    .reset()
                    .write(&line[(pos + token.len())..])
                    .lf();
            }
            None => {
                EasyTermColor(stream).write(line).lf();
            }
        }
    }
}

impl Default for StdHandler {
    fn default() -> Self {
        Self::new(Colors::default())
    }
}

impl Handler for StdHandler {
    fn write(&self, level: Level, line: &str) {
        let use_termcolor = match self.colors {
            Colors::Disabled => false,
            Colors::Enabled => true,
            Colors::Auto => std::io::stdout().is_terminal(),
        };
        match use_termcolor {
            true => self.write_colored(level, line),
            false => {
                // Hold the lock for the whole line so concurrent writers never
                // interleave inside it.
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(line.as_bytes());
                let _ = out.write_all(b"\n");
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}
