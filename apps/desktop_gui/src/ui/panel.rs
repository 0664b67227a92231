//! One resource's form and table, generic over the resource schema.

use client_core::{
    list::{self, RowAction},
    CrudState, EntityForm, FormMode, RowActionKind, StateSlot,
};
use eframe::egui;
use shared::protocol::{FieldInput, Resource};

use crate::backend_bridge::commands::BackendCommand;

const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 110, 110);

pub struct ResourcePanel<R: Resource> {
    form: EntityForm<R>,
    form_error: Option<String>,
}

impl<R: Resource> Default for ResourcePanel<R> {
    fn default() -> Self {
        Self {
            form: EntityForm::new(),
            form_error: None,
        }
    }
}

fn hint(input: FieldInput) -> &'static str {
    match input {
        FieldInput::Text => "",
        FieldInput::Email => "name@example.com",
        FieldInput::Phone => "(555) 555-5555",
        FieldInput::Date => "YYYY-MM-DD",
    }
}

impl<R: StateSlot> ResourcePanel<R> {
    pub fn form(&self) -> &EntityForm<R> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntityForm<R> {
        &mut self.form
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Follows the backend selection; a new edit target reloads the fields.
    pub fn sync(&mut self, state: &CrudState) {
        if self.form.sync(state.selected::<R>()) {
            self.form_error = None;
        }
    }

    /// Create in create mode, an update request (confirmation first) in edit mode.
    pub fn submit_command(&mut self) -> Option<BackendCommand> {
        let mode = self.form.mode();
        match self.form.submit() {
            Ok(record) => {
                self.form_error = None;
                let record = record.into_any();
                Some(match mode {
                    FormMode::Create => BackendCommand::Create(record),
                    FormMode::Edit => BackendCommand::RequestUpdate(record),
                })
            }
            Err(err) => {
                self.form_error = Some(err.message());
                None
            }
        }
    }

    pub fn cancel_command(&mut self) -> BackendCommand {
        self.form_error = None;
        BackendCommand::ClearSelection(R::KIND)
    }

    pub fn row_command(records: &[R], index: usize, action: RowActionKind) -> Option<BackendCommand> {
        list::activate(records, index, action).map(|action| match action {
            RowAction::Select(record) => BackendCommand::Select(record.into_any()),
            RowAction::Delete(id) => BackendCommand::RequestDelete { kind: R::KIND, id },
        })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &CrudState) -> Option<BackendCommand> {
        self.sync(state);
        let mut command = None;

        ui.heading(self.form().title());
        egui::Grid::new(("form", R::KIND.path()))
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (index, spec) in R::fields().iter().enumerate() {
                    if spec.required {
                        ui.label(format!("{} *", spec.label));
                    } else {
                        ui.label(spec.label);
                    }
                    if let Some(value) = self.form_mut().value_mut(index) {
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .hint_text(hint(spec.input))
                                .desired_width(280.0),
                        );
                    }
                    ui.end_row();
                }
            });

        if let Some(error) = self.form_error() {
            ui.colored_label(ERROR_TEXT, error);
        }

        ui.horizontal(|ui| {
            if ui.button(self.form.submit_label()).clicked() {
                command = self.submit_command();
            }
            if self.form.shows_cancel() && ui.button("Cancel").clicked() {
                command = Some(self.cancel_command());
            }
        });

        ui.add_space(8.0);
        ui.separator();

        let records = state.records::<R>();
        if records.is_empty() {
            ui.label(list::empty_message(R::KIND));
            return command;
        }

        let columns = list::columns::<R>();
        egui::ScrollArea::vertical()
            .id_salt(("table", R::KIND.path()))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new(("table", R::KIND.path()))
                    .striped(true)
                    .num_columns(columns.len() + 1)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for column in &columns {
                            ui.strong(*column);
                        }
                        ui.strong("Actions");
                        ui.end_row();

                        for (index, row) in list::rows(records).iter().enumerate() {
                            for cell in &row.cells {
                                ui.label(cell.as_str());
                            }
                            ui.horizontal(|ui| {
                                if ui.small_button("Edit").clicked() {
                                    command = Self::row_command(records, index, RowActionKind::Edit);
                                }
                                let delete = ui.add_enabled(
                                    row.id.is_some(),
                                    egui::Button::new("Delete").small(),
                                );
                                if delete.clicked() {
                                    command = Self::row_command(records, index, RowActionKind::Delete);
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        command
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
