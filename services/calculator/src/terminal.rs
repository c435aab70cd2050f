use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::Duration;

use dispatch::{Dispatcher, Policy};

use crate::render::Frame;
use crate::session::{self, Session};

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Feeds lines of input into a [`Session`] and redraws it through a [`Dispatcher`]
///
/// The frame is taken when the redraw runs, so whichever call the policy keeps
/// the session is always drawn as it currently is.
pub struct Terminal {
    session: Arc<Mutex<Session>>,
    render: Dispatcher<()>,
}

impl Terminal {
    pub fn new<F>(policy: Policy, delay: Duration, draw: F) -> Terminal
    where
        F: Fn(Frame) + Send + Sync + 'static,
    {
        let session = Arc::new(Mutex::new(Session::new()));
        let shown = Arc::clone(&session);
        let render = Dispatcher::new(
            policy,
            move |()| {
                let frame = lock(&shown).frame();
                draw(frame)
            },
            delay,
        );

        Terminal { session, render }
    }

    pub fn render(&self) -> &Dispatcher<()> {
        &self.render
    }

    /// Presses the keys of `line`, scheduling a redraw after each one
    pub fn feed(&self, line: &str) {
        for input in session::keys(line) {
            lock(&self.session).handle(input);
            self.render.invoke(());
        }
    }

    /// Draws any redraw still waiting on its timer
    pub fn finish(&self) {
        self.render.flush();
    }
}
