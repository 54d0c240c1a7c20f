// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounded line queue drained by a single worker thread.
//!
//! Lines written before `start` wait in the queue. Once it is full, writers
//! block until the worker catches up. `stop` closes the queue, lets the
//! worker drain what is left, and joins it. Writes after `stop` are dropped.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

type Consumer = Box<dyn FnMut(&str) -> io::Result<()> + Send>;

pub(crate) struct LineQueue {
    name: &'static str,
    sender: Mutex<Option<SyncSender<String>>>,
    receiver: Mutex<Option<Receiver<String>>>,
    consumer: Mutex<Option<Consumer>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl LineQueue {
    /// A `capacity` of zero is raised to one so writes before `start` still
    /// return.
    pub(crate) fn new(name: &'static str, capacity: usize, consumer: Consumer) -> Self {
        let (sender, receiver) = mpsc::sync_channel(capacity.max(1));
        LineQueue {
            name,
            sender: Mutex::new(Some(sender)),
            receiver: Mutex::new(Some(receiver)),
            consumer: Mutex::new(Some(consumer)),
            worker: Mutex::new(None),
        }
    }

    /// Spawn the worker. Only the first call has an effect.
    pub(crate) fn start(&self) {
        let receiver = self.receiver.lock().take();
        let consumer = self.consumer.lock().take();
        let (Some(receiver), Some(mut consumer)) = (receiver, consumer) else {
            return;
        };

        let name = self.name;
        tracing::debug!(logger = name, "starting log worker");
        let spawned = thread::Builder::new()
            .name(format!("{name}-logger"))
            .spawn(move || {
                for line in receiver {
                    if let Err(err) = consumer(&line) {
                        tracing::error!(logger = name, error = %err, "log delivery failed, worker exiting");
                        break;
                    }
                }
            });

        match spawned {
            Ok(handle) => *self.worker.lock() = Some(handle),
            Err(err) => tracing::error!(logger = name, error = %err, "could not spawn log worker"),
        }
    }

    pub(crate) fn push(&self, line: String) {
        // Clone the sender so a blocking send does not hold the lock.
        let sender = self.sender.lock().clone();
        match sender {
            Some(sender) => {
                if sender.send(line).is_err() {
                    tracing::trace!(logger = self.name, "log worker gone, line dropped");
                }
            }
            None => tracing::trace!(logger = self.name, "logger stopped, line dropped"),
        }
    }

    /// Close the queue and wait for the worker to drain it. Idempotent.
    pub(crate) fn stop(&self) {
        drop(self.sender.lock().take());
        // Never started: discard buffered lines so nothing waits on them.
        drop(self.receiver.lock().take());
        if let Some(handle) = self.worker.lock().take() {
            if handle.join().is_err() {
                tracing::error!(logger = self.name, "log worker panicked");
            }
        }
    }
}

impl Drop for LineQueue {
    fn drop(&mut self) {
        self.stop();
    }
}
