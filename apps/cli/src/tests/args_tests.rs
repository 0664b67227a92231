use clap::Parser;

use super::*;

#[test]
fn add_contact_collects_given_fields_in_schema_order() {
    let cli = Cli::parse_from([
        "cli", "contacts", "add", "--email", "a@x.com", "--name", "Ana",
    ]);
    let (kind, op) = cli.resource.into_parts();
    assert_eq!(kind, ResourceKind::Contacts);
    assert_eq!(
        op,
        Op::Add(vec![("name", "Ana".into()), ("email", "a@x.com".into())])
    );
}

#[test]
fn update_task_keeps_id_and_only_supplied_fields() {
    let cli = Cli::parse_from([
        "cli", "tasks", "update", "t1", "--due-date", "2025-03-01", "--yes",
    ]);
    assert!(cli.yes);
    let (kind, op) = cli.resource.into_parts();
    assert_eq!(kind, ResourceKind::Tasks);
    assert_eq!(
        op,
        Op::Update {
            id: "t1".into(),
            values: vec![("dueDate", "2025-03-01".into())],
        }
    );
}

#[test]
fn global_flags_are_accepted_before_the_resource() {
    let cli = Cli::parse_from([
        "cli",
        "--api-base-url",
        "http://api.test",
        "-y",
        "contacts",
        "delete",
        "7",
    ]);
    assert_eq!(cli.api_base_url.as_deref(), Some("http://api.test"));
    assert!(cli.yes);
    assert_eq!(cli.resource.into_parts().1, Op::Delete { id: "7".into() });
}

#[test]
fn unknown_resource_is_rejected() {
    assert!(Cli::try_parse_from(["cli", "projects", "list"]).is_err());
}
