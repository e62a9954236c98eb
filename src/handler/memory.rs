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

use crate::handler::Handler;
use crate::level::Level;
use crossbeam_queue::ArrayQueue;
use std::sync::Arc;

const DEFAULT_BUF_SIZE: usize = 32;

/// A queue of captured log lines.
///
/// The default size of the queue is 32 lines.
#[derive(Clone)]
pub struct LineQueue(Arc<ArrayQueue<String>>);

impl Default for LineQueue {
    fn default() -> Self {
        Self::new(DEFAULT_BUF_SIZE)
    }
}

impl LineQueue {
    /// Creates a new [LineQueue](LineQueue).
    ///
    /// The queue acts as a ring-buffer, when it is full, new lines are
    /// inserted replacing older lines.
    ///
    /// # Arguments
    ///
    /// * `buffer_size`: the size of the buffer.
    ///
    /// returns: LineQueue
    pub fn new(buffer_size: usize) -> Self {
        Self(Arc::new(ArrayQueue::new(buffer_size)))
    }

    /// Pops a captured line from the queue if any.
    pub fn pop(&self) -> Option<String> {
        self.0.pop()
    }

    /// Returns true when nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clears the queue.
    pub fn clear(&self) {
        while self.pop().is_some() {}
    }
}

/// A basic handler which redirects formatted lines to a queue.
///
/// This is the capture path used by tests and by applications which want to
/// read their own log output back programmatically.
pub struct MemoryHandler {
    queue: LineQueue,
}

impl MemoryHandler {
    /// Creates a new [MemoryHandler](MemoryHandler).
    ///
    /// # Arguments
    ///
    /// * `queue`: the queue to record lines into.
    ///
    /// returns: MemoryHandler
    pub fn new(queue: LineQueue) -> Self {
        Self { queue }
    }
}

impl Handler for MemoryHandler {
    fn write(&self, _: Level, line: &str) {
        self.queue.0.force_push(line.into());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::{LineQueue, MemoryHandler};
    use crate::handler::Handler;
    use crate::level::Level;

    #[test]
    fn ring_buffer_drops_oldest() {
        let queue = LineQueue::new(2);
        let handler = MemoryHandler::new(queue.clone());
        handler.write(Level::Info, "a");
        handler.write(Level::Info, "b");
        handler.write(Level::Info, "c");
        assert_eq!(queue.pop().as_deref(), Some("b"));
        assert_eq!(queue.pop().as_deref(), Some("c"));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn clear_empties_queue() {
        let queue = LineQueue::default();
        let handler = MemoryHandler::new(queue.clone());
        handler.write(Level::Warn, "x");
        assert!(!queue.is_empty());
        queue.clear();
        assert!(queue.is_empty());
    }
}
