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

//! Call-site metadata attached to log invocations.

use crate::level::Level;

/// The call-site metadata of a single log invocation.
///
/// All fields are accepted as-is: empty strings and a zero line number are
/// valid neutral values for callers without call-site introspection.
#[derive(Clone, Copy, Debug)]
pub struct Callsite<'a> {
    function: &'a str,
    file: &'a str,
    line: u32,
}

impl<'a> Callsite<'a> {
    /// Creates a new [Callsite](Callsite).
    ///
    /// # Arguments
    ///
    /// * `function`: the name of the invoking function.
    /// * `file`: the path of the invoking source file.
    /// * `line`: the line number of the invocation.
    ///
    /// returns: Callsite
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// The name of the invoking function.
    pub fn function(&self) -> &'a str {
        self.function
    }

    /// The full path of the invoking source file.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line number of the invocation.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Extracts the final path segment of the invoking source file.
    ///
    /// A path without any separator is returned unchanged. Both `/` and `\`
    /// are recognized so that paths recorded on either family of platforms
    /// render the same way.
    pub fn file_basename(&self) -> &'a str {
        self.file
            .rfind(|c| c == '/' || c == '\\')
            .map(|v| &self.file[(v + 1)..])
            .unwrap_or(self.file)
    }
}

/// A single log event, constructed at the call boundary and consumed
/// immediately by formatting. Never stored or queued.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    level: Level,
    msg: &'a str,
    callsite: Callsite<'a>,
}

impl<'a> LogRecord<'a> {
    /// Creates a new [LogRecord](LogRecord) from a level, a message and its
    /// call-site metadata.
    pub fn new(level: Level, msg: &'a str, callsite: Callsite<'a>) -> Self {
        Self {
            level,
            msg,
            callsite,
        }
    }

    /// The severity of this record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The message text of this record.
    pub fn msg(&self) -> &'a str {
        self.msg
    }

    /// The call-site metadata of this record.
    pub fn callsite(&self) -> &Callsite<'a> {
        &self.callsite
    }
}

#[cfg(test)]
mod tests {
    use super::Callsite;

    #[test]
    fn basename_multi_segment() {
        let site = Callsite::new("doWork", "/a/b/c/File.ext", 1);
        assert_eq!(site.file_basename(), "File.ext");
    }

    #[test]
    fn basename_no_separator() {
        let site = Callsite::new("doWork", "File.ext", 1);
        assert_eq!(site.file_basename(), "File.ext");
    }

    #[test]
    fn basename_backslash() {
        let site = Callsite::new("doWork", "C:\\src\\Main.ext", 1);
        assert_eq!(site.file_basename(), "Main.ext");
    }

    #[test]
    fn basename_empty_and_trailing() {
        assert_eq!(Callsite::new("", "", 0).file_basename(), "");
        assert_eq!(Callsite::new("", "/a/b/", 0).file_basename(), "");
    }
}
