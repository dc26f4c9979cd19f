/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines progress reporting messages, sinks, and helper functions for survey queries.
//
// Created on: 14 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Progress reporting primitives for well ties and mesh construction.

use crate::notices::Advisory;
use ferreus_survey_utils::GridIndex;
use std::fmt::Debug;
use std::sync::{Arc, mpsc};
use std::thread;

/// Events emitted while tying wells and answering queries.
#[derive(Debug, Clone)]
pub enum ProgressMsg {
    /// A well was registered and tied to the grid.
    WellTied { name: String, tie: GridIndex },

    /// An advisory raised by a query. The same advisory is also returned
    /// in the query result.
    Advisory { notice: Advisory },

    /// Progress through the registered wells while building a mesh or sparse list.
    MeshProgress { wells_done: usize, wells_total: usize },

    /// Arbitrary informational message.
    Message { message: String },
}

/// Sink that consumes progress messages.
pub trait ProgressSink: Send + Sync + Debug {
    fn emit(&self, msg: ProgressMsg);
}

/// Progress sink that forwards messages over a channel.
#[derive(Debug)]
pub struct ClosureSink {
    tx: mpsc::SyncSender<ProgressMsg>,
}

impl ProgressSink for ClosureSink {
    #[inline]
    fn emit(&self, msg: ProgressMsg) {
        let _ = self.tx.try_send(msg);
    }
}

/// Spawns a listener thread that runs a handler closure for each progress message.
///
/// Messages are dropped rather than blocking the caller when the buffer is full.
pub fn closure_sink<F>(
    buffer: usize,
    mut handler: F,
) -> (Arc<dyn ProgressSink>, thread::JoinHandle<()>)
where
    F: FnMut(ProgressMsg) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<ProgressMsg>(buffer.max(1));
    let sink: Arc<dyn ProgressSink> = Arc::new(ClosureSink { tx });

    let handle = thread::spawn(move || {
        while let Ok(msg) = rx.recv() {
            handler(msg);
        }
    });

    (sink, handle)
}

/// Sends `msg` to the sink if one is installed.
#[inline]
pub(crate) fn emit(sink: &Option<Arc<dyn ProgressSink>>, msg: ProgressMsg) {
    if let Some(sink) = sink {
        sink.emit(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_sink_delivers_messages_in_order() {
        let (tx, rx) = mpsc::channel::<String>();
        let (sink, handle) = closure_sink(16, move |msg| {
            if let ProgressMsg::Message { message } = msg {
                let _ = tx.send(message);
            }
        });

        sink.emit(ProgressMsg::Message { message: "first".into() });
        sink.emit(ProgressMsg::Message { message: "second".into() });

        // Dropping the last sender ends the listener loop.
        drop(sink);
        handle.join().unwrap();

        let received: Vec<String> = rx.iter().collect();
        assert_eq!(received, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn emit_without_sink_is_a_no_op() {
        emit(&None, ProgressMsg::Message { message: "ignored".into() });
    }
}
