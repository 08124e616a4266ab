// Reusable UI components
// Message bubbles, notice banner and the transient status line

use chat_client_gui::state::{ChatMessage, MessageRole, Notice, NoticeLevel};
use eframe::egui;

/// Colour used for each notice level
pub fn notice_color(level: NoticeLevel) -> egui::Color32 {
    match level {
        NoticeLevel::Info => egui::Color32::from_rgb(80, 150, 220),
        NoticeLevel::Success => egui::Color32::from_rgb(0, 180, 0),
        NoticeLevel::Error => egui::Color32::from_rgb(220, 0, 0),
    }
}

/// Render an inline notice; returns true when the user dismissed it
pub fn notice_banner(ui: &mut egui::Ui, notice: &Notice) -> bool {
    let mut dismissed = false;
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(notice_color(notice.level), &notice.text);
        if ui.small_button("✖").clicked() {
            dismissed = true;
        }
    });
    dismissed
}

/// Render a spinner next to the in-flight request's label
pub fn status_line(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(egui::RichText::new(label).italics().weak());
    });
}

/// Render one transcript entry
pub fn message_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (who, color) = match message.role {
        MessageRole::User => ("🧑 You", egui::Color32::from_rgb(80, 150, 220)),
        MessageRole::Assistant => ("🤖 Assistant", egui::Color32::from_rgb(0, 170, 120)),
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(who).strong().color(color));
        ui.add_space(4.0);
        ui.label(&message.content);
    });
    ui.add_space(6.0);
}

/// Render a primary action button, greyed out when disabled
pub fn primary_button(ui: &mut egui::Ui, enabled: bool, text: &str) -> egui::Response {
    ui.add_enabled(enabled, egui::Button::new(egui::RichText::new(text).strong()))
}
