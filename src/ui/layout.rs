// Main application layout
// Menu bar, control panel (consent, uploads, reset), transcript and input bar

use chat_client_gui::actions::Action;
use chat_client_gui::state::{Busy, ChatState};
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::ui::components::*;

/// Widget buffers that are not part of the chat state
#[derive(Debug, Default)]
pub struct ViewState {
    /// Text in the message input line
    pub input: String,
    /// Path typed into the upload box
    pub upload_path: String,
    /// Files dropped on the window, waiting for a frame with no other action
    pub pending_drops: VecDeque<PathBuf>,
}

/// Render the main application layout
///
/// Returns the action the user triggered this frame, if any.
pub fn render_app_layout(
    ctx: &egui::Context,
    state: &mut ChatState,
    view: &mut ViewState,
    base_url: &str,
) -> Option<Action> {
    let mut action = None;

    render_menu_bar(ctx);

    egui::SidePanel::left("control_panel")
        .resizable(true)
        .default_width(280.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            render_control_panel(ui, state, view, base_url, &mut action);
        });

    if state.has_session() {
        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            render_input_bar(ui, state, view, &mut action);
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        render_conversation(ui, state);
    });

    action
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.style_mut(|style| {
                        style.visuals.dark_mode = dark_mode;
                    });
                }
            });
        });
    });
}

/// Render the left control panel
fn render_control_panel(
    ui: &mut egui::Ui,
    state: &ChatState,
    view: &mut ViewState,
    base_url: &str,
    action: &mut Option<Action>,
) {
    let idle = !state.is_busy();

    ui.add_space(8.0);
    ui.heading("⚙ Control Panel");
    ui.label(egui::RichText::new(base_url).monospace().weak().size(11.0));
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    match state.session_id() {
        None => {
            ui.colored_label(
                egui::Color32::from_rgb(220, 180, 0),
                "Consent first to start a session.",
            );
            ui.add_space(8.0);
            if primary_button(ui, idle, "✅ Start (Consent)").clicked() {
                *action = Some(Action::Consent);
            }
        }
        Some(session_id) => {
            ui.colored_label(
                egui::Color32::from_rgb(0, 180, 0),
                format!("Connected (Session: {})", session_id),
            );

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            // File upload section
            ui.label(egui::RichText::new("📁 File Upload").strong());
            ui.label(
                egui::RichText::new("Type a path or drop a file onto the window")
                    .weak()
                    .size(12.0),
            );
            ui.add_space(4.0);
            ui.add_enabled(
                idle,
                egui::TextEdit::singleline(&mut view.upload_path)
                    .hint_text("/path/to/file")
                    .desired_width(f32::INFINITY),
            );
            let can_upload = idle && !view.upload_path.trim().is_empty();
            if primary_button(ui, can_upload, "Upload").clicked() {
                let path = PathBuf::from(view.upload_path.trim());
                view.upload_path.clear();
                *action = Some(Action::Upload { path });
            }

            // Files waiting to go out with the next message
            if !state.files().is_empty() {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("Pending files ({}):", state.files().len()))
                        .small(),
                );
                for name in state.file_names() {
                    ui.code(name);
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            if primary_button(ui, idle, "🗑 Reset Conversation").clicked() {
                *action = Some(Action::Reset);
            }
        }
    }

    // Sending shows its status in the transcript instead
    if let Some(busy) = state.busy().filter(|b| **b != Busy::Sending) {
        ui.add_space(8.0);
        status_line(ui, &busy.label());
    }
}

/// Render the transcript, or the consent hint when there is no session
fn render_conversation(ui: &mut egui::Ui, state: &mut ChatState) {
    if let Some(notice) = state.notice().cloned() {
        if notice_banner(ui, &notice) {
            state.dismiss_notice();
        }
        ui.add_space(4.0);
        ui.separator();
    }

    if state.needs_consent() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(egui::RichText::new("🤖 Chat Client").size(24.0));
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("👈 Start a session from the control panel.").size(14.0),
            );
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("transcript_scroll")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in state.messages() {
                message_bubble(ui, message);
            }
            if state.busy() == Some(&Busy::Sending) {
                status_line(ui, &Busy::Sending.label());
            }
        });
}

/// Render the message input line
fn render_input_bar(
    ui: &mut egui::Ui,
    state: &ChatState,
    view: &mut ViewState,
    action: &mut Option<Action>,
) {
    let enabled = state.has_session() && !state.is_busy();

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let send_width = 80.0;
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut view.input)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - send_width),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = primary_button(ui, enabled, "Send").clicked();

        if enabled && (submitted || clicked) && !view.input.trim().is_empty() {
            let text = std::mem::take(&mut view.input);
            *action = Some(Action::Send { text });
            response.request_focus();
        }
    });
    ui.add_space(6.0);
}
