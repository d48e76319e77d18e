//! End-to-end tests of the reqwest client and the synchronizer against an
//! in-process axum server that follows the activities API contract.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use club_signup::{
    project_list, shared_view, Activity, ActivityApi, ApiConfig, ApiError, Catalog,
    HttpActivityClient, ListView, QueuedTimer, RemovalControl, SharedView, SignupOutcome,
    SignupPatch, UnregisterOutcome, ViewStore, ViewSynchronizer,
};

type Db = Arc<Mutex<Vec<Activity>>>;

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

async fn list_activities(State(db): State<Db>) -> Json<Catalog> {
    let activities = db.lock().unwrap();
    Json(activities.iter().cloned().collect())
}

async fn signup(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut activities = db.lock().unwrap();
    match activities.iter_mut().find(|a| a.name == name) {
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"}))),
        Some(activity) if activity.participants.contains(&query.email) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Student is already signed up"})),
        ),
        Some(activity) => {
            activity.participants.push(query.email.clone());
            (
                StatusCode::OK,
                Json(json!({"message": format!("Signed up {} for {}", query.email, name)})),
            )
        }
    }
}

async fn unregister(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut activities = db.lock().unwrap();
    let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"})));
    };

    let before = activity.participants.len();
    activity.participants.retain(|p| *p != query.email);
    if activity.participants.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Participant not found"})));
    }

    (
        StatusCode::OK,
        Json(json!({"message": format!("Unregistered {} from {}", query.email, name)})),
    )
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_fixture(activities: Vec<Activity>) -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(activities));
    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/participants", delete(unregister))
        .with_state(Arc::clone(&db));

    (serve(app).await, db)
}

fn seed() -> Vec<Activity> {
    vec![
        Activity::new("Programming Class", "Learn to code", "Tue 3:30 PM", 20),
        Activity::new("Chess Club", "Strategy games", "Fri 3:30 PM", 10).participant("a@x.com"),
        Activity::new("Art Club", "Painting", "Wed 3:30 PM", 2)
            .participant("p@x.com")
            .participant("q@x.com"),
    ]
}

fn client(base_url: &str) -> HttpActivityClient {
    HttpActivityClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: Some(10),
    })
    .unwrap()
}

type TestSync = ViewSynchronizer<HttpActivityClient, SharedView, QueuedTimer>;

fn synchronizer(base_url: &str) -> TestSync {
    ViewSynchronizer::new(client(base_url), shared_view(), QueuedTimer::new())
}

fn spots(sync: &TestSync, activity: &str) -> i64 {
    sync.store()
        .read(|state| state.card(activity).map(|c| c.spots_left()))
        .unwrap()
}

#[tokio::test]
async fn test_list_preserves_server_order() -> anyhow::Result<()> {
    let (base, _db) = spawn_fixture(seed()).await;

    let catalog = client(&base).list_activities().await?;
    let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Club"]);
    assert_eq!(catalog.get("Art Club").unwrap().spots_left(), 0);
    Ok(())
}

#[tokio::test]
async fn test_signup_and_unregister_cycle() -> anyhow::Result<()> {
    let (base, db) = spawn_fixture(seed()).await;
    let sync = synchronizer(&base);

    assert_eq!(sync.load_catalog().await?, 3);
    assert_eq!(spots(&sync, "Chess Club"), 9);

    let outcome = sync.signup("Chess Club", "b@x.com").await;
    assert_eq!(
        outcome,
        SignupOutcome::Registered {
            message: "Signed up b@x.com for Chess Club".to_string(),
            patch: SignupPatch::Applied,
        }
    );
    assert_eq!(spots(&sync, "Chess Club"), 8);

    // Server and view agree after the patch
    let server_side = db.lock().unwrap()[1].participants.clone();
    let view_side: Vec<String> = sync.store().read(|state| {
        state.card("Chess Club").unwrap().roster.iter().map(|r| r.email.clone()).collect()
    });
    assert_eq!(server_side, view_side);

    let duplicate = sync.signup("Chess Club", "b@x.com").await;
    assert_eq!(
        duplicate,
        SignupOutcome::Rejected {
            status: 400,
            message: "Student is already signed up".to_string(),
        }
    );
    assert_eq!(spots(&sync, "Chess Club"), 8);

    assert_eq!(sync.unregister("Chess Club", "b@x.com").await, UnregisterOutcome::Removed);
    assert_eq!(spots(&sync, "Chess Club"), 9);
    assert!(!db.lock().unwrap()[1].participants.contains(&"b@x.com".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_signup_unknown_activity() -> anyhow::Result<()> {
    let (base, _db) = spawn_fixture(seed()).await;
    let sync = synchronizer(&base);
    sync.load_catalog().await?;
    let before = sync.store().read(|state| state.cards().to_vec());

    let outcome = sync.signup("Robotics", "b@x.com").await;
    assert_eq!(
        outcome,
        SignupOutcome::Rejected {
            status: 404,
            message: "Activity not found".to_string(),
        }
    );
    assert_eq!(sync.store().read(|state| state.cards().to_vec()), before);
    Ok(())
}

#[tokio::test]
async fn test_unregister_rejected_keeps_row() -> anyhow::Result<()> {
    let (base, db) = spawn_fixture(seed()).await;
    let sync = synchronizer(&base);
    sync.load_catalog().await?;

    // Someone else removed the participant after our load
    db.lock().unwrap()[1].participants.clear();

    let outcome = sync.unregister("Chess Club", "a@x.com").await;
    assert!(matches!(
        outcome,
        UnregisterOutcome::Failed(ApiError::Status { status: 404, .. })
    ));

    sync.store().read(|state| {
        let row = state.card("Chess Club").unwrap().row("a@x.com").unwrap();
        assert_eq!(row.control, RemovalControl::Idle);
    });
    assert_eq!(spots(&sync, "Chess Club"), 9);
    Ok(())
}

#[tokio::test]
async fn test_names_and_emails_are_encoded() -> anyhow::Result<()> {
    let (base, db) = spawn_fixture(vec![Activity::new("Art & Design", "Mixed media", "Mon", 5)]).await;
    let sync = synchronizer(&base);
    sync.load_catalog().await?;

    let outcome = sync.signup("Art & Design", "a+b@x.com").await;
    assert!(matches!(outcome, SignupOutcome::Registered { .. }));
    assert_eq!(db.lock().unwrap()[0].participants, vec!["a+b@x.com".to_string()]);

    assert_eq!(sync.unregister("Art & Design", "a+b@x.com").await, UnregisterOutcome::Removed);
    assert!(db.lock().unwrap()[0].participants.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_load_failure_shows_message() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/activities",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let sync = synchronizer(&base);

    let result = sync.load_catalog().await;
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    assert_eq!(sync.store().read(project_list), ListView::Failed);
    Ok(())
}
