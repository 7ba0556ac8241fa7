//! Question box submission and answer polling

use super::App;
use crate::ai;
use eframe::egui;
use tracing::debug;

impl App {
    /// Submit the current question. Blank input and double submits are
    /// rejected by the view state, which also disables the button.
    pub fn submit_question(&mut self, ctx: &egui::Context) {
        let Some(request) = self.state.begin_question() else {
            return;
        };

        let http = self.http.clone();
        let settings = self.settings.clone();
        let slot = self.pending_answer.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let reply = ai::relay(http, settings, request).await;
            if let Ok(mut s) = slot.lock() {
                *s = Some(reply);
            }
            ctx.request_repaint();
        });
    }

    /// Move a finished answer from the runtime into view state
    pub fn poll_answer(&mut self) {
        let reply = match self.pending_answer.lock() {
            Ok(mut s) => s.take(),
            Err(_) => None,
        };
        if let Some(reply) = reply {
            debug!(len = reply.text.len(), is_error = reply.is_error, "Assistant answer ready");
            self.state.finish_question(reply);
        }
    }
}
