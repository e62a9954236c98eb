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

//! The log sink system, with default provided handlers.

mod memory;
mod stdout;

use crate::level::Level;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A dynamic atomic flag.
///
/// Both configuration switches of the logger are stored behind this type so
/// that instances shared across threads observe toggles without tearing.
#[derive(Clone)]
pub struct Flag(Arc<AtomicBool>);

impl Flag {
    /// Creates a new flag.
    ///
    /// # Arguments
    ///
    /// * `initial`: the initial value of this flag.
    ///
    /// returns: Flag
    pub fn new(initial: bool) -> Self {
        Self(Arc::new(AtomicBool::new(initial)))
    }

    /// Returns true if this flag is ON, false otherwise.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Sets this flag.
    pub fn set(&self, flag: bool) {
        self.0.store(flag, Ordering::Release);
    }
}

/// The main sink trait.
///
/// Implementations must treat each call as a single atomic emission of one
/// fully formatted line; a line must never reach concurrent observers in
/// partial fragments. Implementations must not fail: write errors are
/// swallowed, never surfaced to the logging caller.
pub trait Handler: Send + Sync {
    /// Called when a formatted line is being emitted.
    ///
    /// # Arguments
    ///
    /// * `level`: the severity of the message the line was built from.
    /// * `line`: the complete formatted line, without a trailing newline.
    fn write(&self, level: Level, line: &str);

    /// Called when the logger is asked to flush its sink.
    fn flush(&self);
}

pub use memory::{LineQueue, MemoryHandler};
pub use stdout::{Colors, StdHandler};
