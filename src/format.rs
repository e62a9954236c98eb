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

//! Timestamp and log line formatting.

use crate::callsite::LogRecord;
use std::fmt::Write;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

static TIMESTAMP_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Placeholder substituted when timestamp rendering fails. Formatting a fixed
/// pattern essentially cannot fail, but the logging path must never propagate
/// an error, so keep a stable-width stand-in.
pub const TIMESTAMP_FALLBACK: &str = "????-??-?? ??:??:??";

/// Renders the current local time as `yyyy-MM-dd HH:mm:ss`.
///
/// Falls back to UTC when the local offset cannot be determined (the offset
/// lookup is sound only on single-threaded processes on some Unix platforms),
/// and to [TIMESTAMP_FALLBACK](TIMESTAMP_FALLBACK) when formatting fails.
pub fn timestamp() -> String {
    let time = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    time.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| TIMESTAMP_FALLBACK.into())
}

/// Writes one formatted log line (without the trailing newline) into `out`.
///
/// # Arguments
///
/// * `out`: the buffer the line is assembled into.
/// * `record`: the log event to format.
/// * `verbose_details`: true to include call-site metadata, false for the
///   terse timestamp/level/message form.
/// * `ts`: the pre-rendered timestamp string.
///
/// returns: ()
pub fn write_record(out: &mut String, record: &LogRecord, verbose_details: bool, ts: &str) {
    let site = record.callsite();
    // Writing into a String cannot fail.
    let _ = match verbose_details {
        true => write!(
            out,
            "{} [{}] {} {} [line:{}] --- {}",
            ts,
            record.level(),
            site.function(),
            site.file_basename(),
            site.line(),
            record.msg()
        ),
        false => write!(out, "{} [{}] {}", ts, record.level(), record.msg()),
    };
}

#[cfg(test)]
mod tests {
    use super::{timestamp, write_record};
    use crate::callsite::{Callsite, LogRecord};
    use crate::level::Level;

    fn render(record: &LogRecord, verbose_details: bool) -> String {
        let mut out = String::new();
        write_record(&mut out, record, verbose_details, "2016-02-23 10:00:00");
        out
    }

    #[test]
    fn timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        for (i, c) in ts.chars().enumerate() {
            match i {
                4 | 7 => assert_eq!(c, '-'),
                10 => assert_eq!(c, ' '),
                13 | 16 => assert_eq!(c, ':'),
                _ => assert!(c.is_ascii_digit(), "unexpected char {:?} at {}", c, i),
            }
        }
    }

    #[test]
    fn verbose_layout() {
        let record = LogRecord::new(
            Level::Error,
            "boom",
            Callsite::new("doWork", "/x/y/Main.ext", 42),
        );
        assert_eq!(
            render(&record, true),
            "2016-02-23 10:00:00 [ERROR] doWork Main.ext [line:42] --- boom"
        );
    }

    #[test]
    fn terse_layout() {
        let record = LogRecord::new(Level::Info, "ready", Callsite::new("f", "/a/b.rs", 7));
        assert_eq!(render(&record, false), "2016-02-23 10:00:00 [INFO] ready");
    }

    #[test]
    fn empty_inputs_accepted() {
        let record = LogRecord::new(Level::Debug, "", Callsite::new("", "", 0));
        assert_eq!(
            render(&record, true),
            "2016-02-23 10:00:00 [DEBUG]   [line:0] --- "
        );
    }
}
