use super::*;
use shared::domain::{Contact, Task};

fn stored_contact() -> Contact {
    Contact {
        id: Some(RecordId::Number(4)),
        name: "Bo".into(),
        email: "b@x.com".into(),
        phone_number: Some("555-0101".into()),
    }
}

#[test]
fn new_record_submission_carries_entered_values_and_no_id() {
    let mut form = EntityForm::<Contact>::new();
    form.set_by_key("name", "Ana");
    form.set_by_key("email", "a@x.com");

    let record = form.submit().expect("valid submission");

    assert_eq!(
        record,
        Contact {
            id: None,
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone_number: None,
        }
    );
}

#[test]
fn edit_submission_keeps_id_and_untouched_fields() {
    let stored = stored_contact();
    let mut form = EntityForm::with_initial(Some(&stored));
    form.set_by_key("email", "bo@new.example");

    let record = form.submit().expect("valid submission");

    assert_eq!(record.id, Some(RecordId::Number(4)));
    assert_eq!(record.name, "Bo");
    assert_eq!(record.email, "bo@new.example");
    assert_eq!(record.phone_number.as_deref(), Some("555-0101"));
}

#[test]
fn changing_initial_value_resets_every_field() {
    let stored = stored_contact();
    let mut form = EntityForm::<Contact>::new();
    form.set(0, "half-typed");

    assert!(form.sync(Some(&stored)));
    assert_eq!(form.value(0), "Bo");
    assert_eq!(form.value(1), "b@x.com");
    assert_eq!(form.value(2), "555-0101");

    form.set(1, "edited@x.com");
    assert!(form.sync(None));
    assert!((0..3).all(|index| form.value(index).is_empty()));
}

#[test]
fn unchanged_initial_value_keeps_edits() {
    let stored = stored_contact();
    let mut form = EntityForm::with_initial(Some(&stored));
    form.set(0, "Bob");

    assert!(!form.sync(Some(&stored.clone())));
    assert_eq!(form.value(0), "Bob");
}

#[test]
fn mode_follows_the_initial_id_only() {
    let mut form = EntityForm::<Task>::new();
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.submit_label(), "Save");
    assert!(!form.shows_cancel());
    assert_eq!(form.title(), "New task");

    let task = Task {
        id: Some(RecordId::Text("t1".into())),
        ..Task::default()
    };
    form.sync(Some(&task));
    assert_eq!(form.mode(), FormMode::Edit);
    assert_eq!(form.submit_label(), "Update");
    assert!(form.shows_cancel());
    assert_eq!(form.title(), "Edit task");
}

#[test]
fn blank_required_field_blocks_submission_and_keeps_input() {
    let mut form = EntityForm::<Task>::new();
    form.set_by_key("name", "Plan");
    form.set_by_key("description", "   ");

    let err = form.submit().expect_err("description is blank");

    assert_eq!(err, FormError::missing("description", "Description"));
    assert_eq!(form.value(0), "Plan");
    assert_eq!(
        form.missing_required()
            .iter()
            .map(|spec| spec.key)
            .collect::<Vec<_>>(),
        vec!["description", "dueDate"]
    );
}

#[test]
fn optional_phone_may_stay_blank() {
    let mut form = EntityForm::<Contact>::new();
    form.set(0, "Ana");
    form.set(1, "a@x.com");
    assert!(form.missing_required().is_empty());
}

#[test]
fn submission_clears_the_fields() {
    let stored = stored_contact();
    let mut form = EntityForm::with_initial(Some(&stored));

    form.submit().expect("valid submission");

    assert!((0..3).all(|index| form.value(index).is_empty()));
    assert_eq!(form.mode(), FormMode::Edit);
}

#[test]
fn no_semantic_validation_of_formats() {
    let mut form = EntityForm::<Task>::new();
    form.set(0, "Plan");
    form.set(1, "sprint");
    form.set(2, "someday");

    let task = form.submit().expect("dates are not parsed");
    assert_eq!(task.due_date, "someday");
}
