// Chat Client GUI - Main Entry Point
// Native Rust chat front-end for the agent HTTP API

mod ui;
mod worker;

use chat_client_gui::actions::{self, Action};
use chat_client_gui::api::ChatApiClient;
use chat_client_gui::config::ClientConfig;
use chat_client_gui::state::{ActionError, ChatState, Notice};
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};
use ui::{render_app_layout, ViewState};
use worker::RequestWorker;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = ClientConfig::from_env();
    info!("Configuration loaded: {:?}", config);

    // Requests run here so the frame loop never blocks on the network
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("chat-client-runtime")
        .build()?;

    let client = ChatApiClient::new(config.base_url.clone());
    let worker = RequestWorker::new(runtime.handle().clone(), client);

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chat Client")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chat Client",
        options,
        Box::new(move |_cc| Box::new(ChatClientApp::new(worker))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))?;

    Ok(())
}

/// Main application struct
/// Owns the chat state and forwards user actions to the request worker
struct ChatClientApp {
    /// Session, transcript, attached files
    state: ChatState,
    /// Widget buffers (input line, upload path)
    view: ViewState,
    worker: RequestWorker,
}

impl ChatClientApp {
    fn new(worker: RequestWorker) -> Self {
        Self {
            state: ChatState::new(),
            view: ViewState::default(),
            worker,
        }
    }

    /// Run phase one locally and hand the request to the worker
    fn dispatch(&mut self, action: Action, ctx: &egui::Context) {
        match actions::begin(&mut self.state, action) {
            Ok(command) => self.worker.submit(command, ctx),
            Err(ActionError::DuplicateFile(name)) => {
                info!(filename = %name, "Skipping duplicate upload");
                self.state
                    .set_notice(Notice::info(format!("Already attached: {}", name)));
            }
            Err(e) => {
                warn!(error = %e, "Action rejected");
                self.state.set_notice(Notice::error(e.to_string()));
            }
        }
    }

    /// Pick this frame's action: a panel action wins, otherwise the oldest queued drop
    ///
    /// Drops are queued rather than discarded so one landing in the same frame as
    /// a click still uploads once the app is idle. Without a session they are ignored.
    fn next_action(&mut self, panel: Option<Action>, dropped: Vec<PathBuf>) -> Option<Action> {
        if !self.state.has_session() {
            self.view.pending_drops.clear();
            return panel;
        }

        self.view.pending_drops.extend(dropped);

        if panel.is_some() || self.state.is_busy() {
            return panel;
        }

        self.view
            .pending_drops
            .pop_front()
            .map(|path| Action::Upload { path })
    }
}

impl eframe::App for ChatClientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.worker.drain() {
            actions::apply(&mut self.state, outcome);
        }

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        let base_url = self.worker.base_url().to_string();
        let panel = render_app_layout(ctx, &mut self.state, &mut self.view, &base_url);

        if let Some(action) = self.next_action(panel, dropped) {
            self.dispatch(action, ctx);
        }

        if !self.view.pending_drops.is_empty() {
            ctx.request_repaint();
        }
    }
}
