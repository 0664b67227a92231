use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use client_core::{Confirmation, CrudState, Notification, Severity};
use shared::domain::{Contact, ResourceKind, Task};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::panel::ResourcePanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

/// Fill and border colour of the notification banner.
pub(crate) fn severity_colors(severity: Severity) -> (egui::Color32, egui::Color32) {
    match severity {
        Severity::Success => (
            egui::Color32::from_rgb(46, 96, 62),
            egui::Color32::from_rgb(88, 160, 110),
        ),
        Severity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Color32::from_rgb(175, 96, 96),
        ),
        Severity::Info => (
            egui::Color32::from_rgb(44, 72, 110),
            egui::Color32::from_rgb(90, 130, 185),
        ),
        Severity::Warning => (
            egui::Color32::from_rgb(112, 88, 36),
            egui::Color32::from_rgb(190, 150, 70),
        ),
    }
}

/// Window title, question and confirm button label for an open confirmation.
pub(crate) fn confirmation_text(confirmation: &Confirmation) -> (&'static str, String, &'static str) {
    match confirmation {
        Confirmation::Update(record) => (
            "Confirm update",
            format!(
                "Are you sure you want to update this {}?",
                record.kind().singular()
            ),
            "Update",
        ),
        Confirmation::Delete { kind, id } => (
            "Confirm deletion",
            format!("Are you sure you want to delete {} {id}?", kind.singular()),
            "Delete",
        ),
    }
}

fn tab_label(state: &CrudState, kind: ResourceKind) -> String {
    let name = match kind {
        ResourceKind::Contacts => "Contacts",
        ResourceKind::Tasks => "Tasks",
    };
    format!("{name} ({})", state.record_count(kind))
}

pub struct CrudPanelApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
    state: CrudState,
    active_tab: ResourceKind,
    contacts: ResourcePanel<Contact>,
    tasks: ResourcePanel<Task>,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl CrudPanelApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, api_base_url: String) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            api_base_url,
            state: CrudState::default(),
            active_tab: ResourceKind::Contacts,
            contacts: ResourcePanel::default(),
            tasks: ResourcePanel::default(),
            status: "Loading...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::StateChanged(state) => {
                    self.state = *state;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status = format!("{} error", err_label(err.category()));
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: format!("{}: {}", err_label(err.category()), err.message()),
                    });
                }
            }
        }
    }

    fn send(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => severity_colors(Severity::Error),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, stroke))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_notification(&mut self, ui: &mut egui::Ui) {
        let Some(Notification {
            message, severity, ..
        }) = self.state.visible_notification().cloned()
        else {
            return;
        };
        let (fill, stroke) = severity_colors(severity);
        let mut dismissed = false;

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.button("Dismiss").clicked();
                    });
                });
            });
        ui.add_space(6.0);

        if dismissed {
            self.send(BackendCommand::DismissNotification);
        }
    }

    fn show_confirmation(&mut self, ctx: &egui::Context) {
        let Some(confirmation) = self.state.confirmation.clone() else {
            return;
        };
        let (title, question, confirm_label) = confirmation_text(&confirmation);
        let (confirm, cancel) = match confirmation {
            Confirmation::Update(_) => (BackendCommand::ConfirmUpdate, BackendCommand::CancelUpdate),
            Confirmation::Delete { .. } => (BackendCommand::ConfirmDelete, BackendCommand::CancelDelete),
        };

        let mut chosen = None;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(question);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        chosen = Some(cancel);
                    }
                    if ui.button(confirm_label).clicked() {
                        chosen = Some(confirm);
                    }
                });
            });

        if let Some(cmd) = chosen {
            self.send(cmd);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in ResourceKind::ALL {
                    let label = tab_label(&self.state, kind);
                    ui.selectable_value(&mut self.active_tab, kind, label);
                }
                ui.separator();
                if ui.button("Refresh").clicked() {
                    self.send(BackendCommand::LoadAll);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.api_base_url.as_str());
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_notification(ui);

            let command = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.active_tab {
                    ResourceKind::Contacts => self.contacts.show(ui, &self.state),
                    ResourceKind::Tasks => self.tasks.show(ui, &self.state),
                })
                .inner;
            if let Some(cmd) = command {
                self.send(cmd);
            }
        });
    }
}

impl eframe::App for CrudPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_top_bar(ctx);
        self.show_workspace(ctx);
        self.show_confirmation(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
