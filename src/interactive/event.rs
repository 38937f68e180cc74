//! Terminal events as messages
//!
//! One thread blocks on terminal input, another emits ticks; both feed the
//! same channel, which the main thread drains.

use crossterm::event::{self as term, KeyEvent, KeyEventKind};
use log::warn;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Start the input and tick threads
///
/// Both threads stop once the receiver is dropped (the input thread after
/// its next key press).
#[must_use]
pub fn spawn(tick_rate: Duration) -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    spawn_input(tx.clone());
    spawn_ticks(tx, tick_rate);
    rx
}

fn spawn_input(tx: Sender<Event>) {
    thread::spawn(move || {
        loop {
            match term::read() {
                // Only key presses; releases would double the input on Windows
                Ok(term::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("failed to read terminal input: {err}");
                    return;
                }
            }
        }
    });
}

fn spawn_ticks(tx: Sender<Event>, tick_rate: Duration) {
    thread::spawn(move || {
        loop {
            thread::sleep(tick_rate);
            if tx.send(Event::Tick).is_err() {
                return;
            }
        }
    });
}
