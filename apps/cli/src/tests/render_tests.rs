use shared::domain::{Contact, RecordId, Task};

use super::*;

#[test]
fn table_aligns_columns_and_keeps_input_order() {
    let contacts = vec![
        Contact {
            id: Some(RecordId::Number(12)),
            name: "Zed".into(),
            email: "z@x.com".into(),
            phone_number: None,
        },
        Contact {
            id: Some(RecordId::Number(3)),
            name: "Ana Maria".into(),
            email: "a@x.com".into(),
            phone_number: Some("555".into()),
        },
    ];

    let expected = "\
ID  Name       Email    Phone
--  ---------  -------  -----
12  Zed        z@x.com
3   Ana Maria  a@x.com  555
";
    assert_eq!(table(&contacts), expected);
}

#[test]
fn empty_collection_prints_message() {
    assert_eq!(table::<Task>(&[]), "No tasks registered.\n");
}

#[test]
fn notification_line_carries_severity() {
    let note = Notification::new(Severity::Error, "Error creating task!");
    assert_eq!(notification(&note), "[error] Error creating task!");
}
