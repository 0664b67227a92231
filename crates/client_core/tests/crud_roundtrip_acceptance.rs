use std::sync::{
    atomic::{AtomicBool, AtomicI64, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use client_core::{CrudController, RestClient, Severity};
use serde_json::{json, Value};
use shared::domain::{Contact, RecordId, ResourceKind, Task};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct StubApi {
    users: Arc<Mutex<Vec<Value>>>,
    tasks: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicI64>,
    reject_creates: Arc<AtomicBool>,
}

impl StubApi {
    fn collection(&self, name: &str) -> Option<Arc<Mutex<Vec<Value>>>> {
        match name {
            "users" => Some(self.users.clone()),
            "tasks" => Some(self.tasks.clone()),
            _ => None,
        }
    }
}

async fn list(
    State(api): State<StubApi>,
    Path(collection): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let rows = api.collection(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let rows = rows.lock().expect("rows").clone();
    Ok(Json(Value::Array(rows)))
}

async fn create(
    State(api): State<StubApi>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if api.reject_creates.load(Ordering::SeqCst) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let rows = api.collection(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let id = api.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    body["id"] = json!(id.to_string());
    rows.lock().expect("rows").push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn replace(
    State(api): State<StubApi>,
    Path((collection, id)): Path<(String, String)>,
    Json(mut body): Json<Value>,
) -> StatusCode {
    let Some(rows) = api.collection(&collection) else {
        return StatusCode::NOT_FOUND;
    };
    let mut rows = rows.lock().expect("rows");
    match rows.iter_mut().find(|row| row["id"] == json!(id)) {
        Some(row) => {
            body["id"] = json!(id);
            *row = body;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn remove(
    State(api): State<StubApi>,
    Path((collection, id)): Path<(String, String)>,
) -> StatusCode {
    let Some(rows) = api.collection(&collection) else {
        return StatusCode::NOT_FOUND;
    };
    let mut rows = rows.lock().expect("rows");
    let before = rows.len();
    rows.retain(|row| row["id"] != json!(id));
    if rows.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn spawn_stub_api() -> (String, StubApi) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let stub = StubApi::default();
    let app = Router::new()
        .route("/:collection", get(list).post(create))
        .route("/:collection/:id", put(replace).delete(remove))
        .with_state(stub.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), stub)
}

fn ana() -> Contact {
    Contact {
        id: None,
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone_number: None,
    }
}

#[tokio::test]
async fn create_then_delete_round_trip() {
    let (base_url, _stub) = spawn_stub_api().await;
    let mut controller = CrudController::new(RestClient::new(&base_url).expect("client"));

    controller.load_all().await;
    assert!(controller.state().records::<Contact>().is_empty());

    controller.create(ana().into()).await;

    let contacts = controller.state().records::<Contact>();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ana");
    assert_eq!(contacts[0].email, "a@x.com");
    let id = contacts[0].id.clone().expect("server-assigned id");

    controller.request_delete(ResourceKind::Contacts, id);
    controller.confirm_delete().await;

    assert!(controller.state().records::<Contact>().is_empty());
    let note = controller
        .state()
        .visible_notification()
        .expect("notification");
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(note.message, "Contact deleted successfully!");
}

#[tokio::test]
async fn rejected_create_keeps_collection_and_reports_error() {
    let (base_url, stub) = spawn_stub_api().await;
    let mut controller = CrudController::new(RestClient::new(&base_url).expect("client"));
    controller.create(ana().into()).await;
    controller.load_all().await;
    let before = controller.state().records::<Contact>().to_vec();

    stub.reject_creates.store(true, Ordering::SeqCst);
    controller
        .create(
            Contact {
                name: "Bo".into(),
                email: "b@x.com".into(),
                ..ana()
            }
            .into(),
        )
        .await;

    assert_eq!(controller.state().records::<Contact>(), before.as_slice());
    let note = controller
        .state()
        .visible_notification()
        .expect("notification");
    assert_eq!(note.severity, Severity::Error);
    assert!(!note.message.is_empty());
}

#[tokio::test]
async fn task_edit_round_trip_clears_selection() {
    let (base_url, _stub) = spawn_stub_api().await;
    let mut controller = CrudController::new(RestClient::new(&base_url).expect("client"));

    controller
        .create(
            Task {
                id: None,
                name: "Plan".into(),
                description: "sprint".into(),
                due_date: "2025-02-01".into(),
            }
            .into(),
        )
        .await;
    let stored = controller.state().records::<Task>()[0].clone();
    assert_eq!(stored.id, Some(RecordId::Text("1".into())));

    controller.select(stored.clone().into());
    let edited = Task {
        description: "sprint review".into(),
        ..stored
    };
    controller.request_update(edited.into());
    controller.confirm_update().await;

    let tasks = controller.state().records::<Task>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "sprint review");
    assert_eq!(controller.state().selected::<Task>(), None);
    assert_eq!(controller.state().confirmation, None);
}
