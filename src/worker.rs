// Background request runner
// Executes commands on the tokio runtime and hands outcomes back to the UI thread

use chat_client_gui::actions::{self, Command, Outcome};
use chat_client_gui::api::ChatApiClient;
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Runs one command at a time off the frame loop
pub struct RequestWorker {
    handle: Handle,
    client: Arc<ChatApiClient>,
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl RequestWorker {
    pub fn new(handle: Handle, client: ChatApiClient) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self {
            handle,
            client: Arc::new(client),
            tx,
            rx,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Spawn the request; the UI is repainted once the outcome is queued
    pub fn submit(&self, command: Command, ctx: &egui::Context) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        self.handle.spawn(async move {
            let outcome = actions::execute(&client, command).await;
            if tx.send(outcome).is_err() {
                tracing::warn!("UI is gone, dropping request outcome");
            }
            ctx.request_repaint();
        });
    }

    /// Collect every outcome that arrived since the last frame
    pub fn drain(&self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Outcome channel disconnected");
                    break;
                }
            }
        }
        outcomes
    }
}
