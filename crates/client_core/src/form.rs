//! Editable field buffer for one record, generic over the resource schema.

use shared::{
    domain::RecordId,
    error::FormError,
    protocol::{FieldSpec, Resource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm<R> {
    initial: Option<R>,
    values: Vec<String>,
}

impl<R: Resource> Default for EntityForm<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> EntityForm<R> {
    pub fn new() -> Self {
        Self {
            initial: None,
            values: vec![String::new(); R::fields().len()],
        }
    }

    pub fn with_initial(initial: Option<&R>) -> Self {
        let mut form = Self::new();
        form.reset(initial);
        form
    }

    /// Re-initialises every field when the supplied initial value changed
    /// since the last call. Returns whether a reset happened.
    pub fn sync(&mut self, initial: Option<&R>) -> bool {
        if self.initial.as_ref() == initial {
            return false;
        }
        self.reset(initial);
        true
    }

    fn reset(&mut self, initial: Option<&R>) {
        self.values = (0..R::fields().len())
            .map(|index| initial.map(|r| r.field(index).to_string()).unwrap_or_default())
            .collect();
        self.initial = initial.cloned();
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        R::fields()
    }

    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.values.get_mut(index)
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Sets a field by its JSON key; unknown keys are ignored.
    pub fn set_by_key(&mut self, key: &str, value: impl Into<String>) {
        if let Some(index) = R::fields().iter().position(|spec| spec.key == key) {
            self.set(index, value);
        }
    }

    pub fn initial_id(&self) -> Option<&RecordId> {
        self.initial.as_ref().and_then(|r| r.id())
    }

    pub fn mode(&self) -> FormMode {
        if self.initial_id().is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn title(&self) -> String {
        let noun = R::KIND.singular();
        match self.mode() {
            FormMode::Create => format!("New {noun}"),
            FormMode::Edit => format!("Edit {noun}"),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "Save",
            FormMode::Edit => "Update",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        self.mode() == FormMode::Edit
    }

    pub fn missing_required(&self) -> Vec<&'static FieldSpec> {
        R::fields()
            .iter()
            .enumerate()
            .filter(|(index, spec)| spec.required && self.value(*index).trim().is_empty())
            .map(|(_, spec)| spec)
            .collect()
    }

    /// Packages the current values plus the initial id and clears the fields.
    /// Blank required fields reject the submission and keep what was typed.
    pub fn submit(&mut self) -> Result<R, FormError> {
        if let Some(spec) = self.missing_required().first() {
            return Err(FormError::missing(spec.key, spec.label));
        }
        let record = R::from_fields(self.initial_id().cloned(), &self.values);
        self.values.iter_mut().for_each(String::clear);
        Ok(record)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
