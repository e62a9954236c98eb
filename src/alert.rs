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

//! Modal-alert capability seam.
//!
//! Some hosts (typically mobile UI shells) can surface a log message in a
//! modal dialog. Dialog rendering is not this crate's business: the logger
//! only composes a title and a body and hands both to a presenter. Hosts
//! without the capability keep the default [NoopPresenter](NoopPresenter) and
//! the alert operation is a documented no-op.

use crate::callsite::Callsite;

/// The modal-dialog presentation capability.
///
/// Implementations must not fail; presentation errors stay on the host side.
pub trait AlertPresenter: Send + Sync {
    /// Presents a modal alert to the user.
    ///
    /// # Arguments
    ///
    /// * `title`: the dialog title, composed from the call-site file and line.
    /// * `body`: the dialog body, composed from the timestamp, function and message.
    fn present(&self, title: &str, body: &str);
}

/// Presenter for hosts without a modal-dialog capability. Does nothing.
pub struct NoopPresenter;

impl AlertPresenter for NoopPresenter {
    fn present(&self, _: &str, _: &str) {}
}

/// Composes the alert title from call-site metadata.
pub(crate) fn compose_title(site: &Callsite) -> String {
    format!("{} [line:{}]", site.file_basename(), site.line())
}

/// Composes the alert body from the timestamp, function name and message.
pub(crate) fn compose_body(ts: &str, function: &str, msg: &str) -> String {
    format!("{} {} --- {}", ts, function, msg)
}

#[cfg(test)]
mod tests {
    use super::{compose_body, compose_title};
    use crate::callsite::Callsite;

    #[test]
    fn title_layout() {
        let site = Callsite::new("doWork", "/x/y/Main.ext", 42);
        assert_eq!(compose_title(&site), "Main.ext [line:42]");
    }

    #[test]
    fn body_layout() {
        assert_eq!(
            compose_body("2016-02-23 10:00:00", "doWork", "boom"),
            "2016-02-23 10:00:00 doWork --- boom"
        );
    }
}
