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

use std::fmt::{Display, Formatter};

/// An enum representing the available severity levels of the logger.
#[repr(u8)]
#[derive(Clone, PartialEq, Copy, Ord, PartialOrd, Eq, Debug, Hash)]
pub enum Level {
    /// The "verbose" level.
    ///
    /// Designates very low priority, often extremely chatty, information.
    // The discriminants double as the stable numeric ranks of the levels.
    // This works because Rust treats field-less enums the same way as C does:
    // https://doc.rust-lang.org/reference/items/enumerations.html#custom-discriminant-values-for-field-less-enumerations
    Verbose = 1,

    /// The "info" level.
    ///
    /// Designates useful information.
    Info = 2,

    /// The "debug" level.
    ///
    /// Designates information useful while diagnosing.
    Debug = 3,

    /// The "warn" level.
    ///
    /// Designates hazardous situations.
    Warn = 4,

    /// The "error" level.
    ///
    /// Designates very serious errors.
    Error = 5,
}

static LOG_LEVEL_NAMES: [&str; 5] = ["VERBOSE", "INFO", "DEBUG", "WARN", "ERROR"];

impl Level {
    /// Returns the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        LOG_LEVEL_NAMES[*self as usize - 1]
    }

    /// Returns the numeric rank of the `Level`.
    ///
    /// Ranks are stable and strictly increasing from [Verbose](Level::Verbose) (1)
    /// to [Error](Level::Error) (5).
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    const ALL: [Level; 5] = [
        Level::Verbose,
        Level::Info,
        Level::Debug,
        Level::Warn,
        Level::Error,
    ];

    #[test]
    fn ranks_are_increasing() {
        for pair in ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Level::Verbose.rank(), 1);
        assert_eq!(Level::Error.rank(), 5);
    }

    #[test]
    fn display_names() {
        let names: Vec<&str> = ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["VERBOSE", "INFO", "DEBUG", "WARN", "ERROR"]);
        assert_eq!(Level::Warn.to_string(), "WARN");
    }
}
