use catalogue_backend::{
    entities::{
        career::Career,
        project::{Project, ProjectInsert, ProjectPatch},
    },
    errors::StorageError,
    repositories::{
        record::{CareerRepository, RecordRepository},
        supabase_repo::SupabaseStore,
    },
};
use httpmock::Method::PATCH;
use httpmock::prelude::*;
use serde_json::json;

const KEY: &str = "anon-test-key";

fn store(server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(Some(server.base_url()), Some(KEY.to_string()))
}

fn project_row(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "project_name": "Tower Upgrade",
        "customer": "Acme Telecom",
        "oem": "Nokia",
        "operator": "Airtel",
        "activity": "Swap",
        "no_of_sites": 5,
        "image": null,
        "created_at": "2024-05-01T10:00:00+00:00"
    })
}

#[tokio::test]
async fn get_all_reads_snake_case_rows_newest_first() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/projects")
                .query_param("select", "*")
                .query_param("order", "created_at.desc")
                .header("apikey", KEY)
                .header("authorization", format!("Bearer {KEY}"));
            then.status(200).json_body(json!([project_row("p-2"), project_row("p-1")]));
        })
        .await;

    let projects: Vec<Project> = store(&server).get_all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "p-2");
    assert_eq!(projects[0].project_name, "Tower Upgrade");
    assert_eq!(projects[0].no_of_sites, 5);
    assert_eq!(projects[0].image, None);
}

#[tokio::test]
async fn add_sends_snake_case_row_and_returns_representation() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/projects")
                .header("prefer", "return=representation")
                .body_contains("\"project_name\":\"Tower Upgrade\"")
                .body_contains("\"no_of_sites\":5")
                .body_contains("\"created_at\"");
            then.status(201).json_body(json!([project_row("p-9")]));
        })
        .await;

    let created: Project = store(&server)
        .add(ProjectInsert {
            project_name: "Tower Upgrade".into(),
            customer: "Acme Telecom".into(),
            oem: "Nokia".into(),
            operator: "Airtel".into(),
            activity: "Swap".into(),
            no_of_sites: 5,
            image: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "p-9");
    assert_eq!(created.no_of_sites, 5);
}

#[tokio::test]
async fn update_sends_only_present_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/rest/v1/projects")
                .query_param("id", "eq.p-1")
                .json_body(json!({"activity": "Audit"}));
            then.status(200).json_body(json!([project_row("p-1")]));
        })
        .await;

    let patch = ProjectPatch {
        activity: Some("Audit".into()),
        ..Default::default()
    };
    let updated: Option<Project> = store(&server).update("p-1", patch).await.unwrap();

    mock.assert_async().await;
    assert_eq!(updated.map(|p| p.id), Some("p-1".to_string()));
}

#[tokio::test]
async fn empty_patch_falls_back_to_lookup() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/projects").query_param("id", "eq.p-1");
            then.status(200).json_body(json!([project_row("p-1")]));
        })
        .await;

    let result: Option<Project> = store(&server).update("p-1", ProjectPatch::default()).await.unwrap();

    lookup.assert_async().await;
    assert_eq!(result.map(|p| p.id), Some("p-1".to_string()));
}

#[tokio::test]
async fn no_matching_rows_mean_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/rest/v1/projects").query_param("id", "eq.missing");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/rest/v1/projects").query_param("id", "eq.missing");
            then.status(200).json_body(json!([]));
        })
        .await;

    let store = store(&server);

    assert!(!RecordRepository::<Project>::delete(&store, "missing").await.unwrap());

    let patch = ProjectPatch {
        no_of_sites: Some(1),
        ..Default::default()
    };
    assert_eq!(RecordRepository::<Project>::update(&store, "missing", patch).await.unwrap(), None);
}

#[tokio::test]
async fn active_careers_filter_is_pushed_down() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/careers")
                .query_param("is_active", "eq.true");
            then.status(200).json_body(json!([{
                "id": "c-1",
                "job_title": "Field Engineer",
                "department": "Operations",
                "location": "Lagos",
                "employment_type": "Full-time",
                "description": "Installs",
                "requirements": "B.Eng",
                "salary": null,
                "is_active": true,
                "created_at": "2024-05-01T10:00:00.123456+00:00"
            }]));
        })
        .await;

    let careers: Vec<Career> = store(&server).get_active().await.unwrap();

    mock.assert_async().await;
    assert_eq!(careers.len(), 1);
    assert!(careers[0].is_active);
    assert_eq!(careers[0].employment_type, "Full-time");
}

#[tokio::test]
async fn server_errors_are_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/equipment");
            then.status(500).body("database unavailable");
        })
        .await;

    let result: Result<Vec<catalogue_backend::entities::equipment::Equipment>, _> =
        store(&server).get_all().await;

    match result {
        Err(StorageError::Remote { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_configuration_fails_without_network() {
    let store = SupabaseStore::new(Some("https://example.supabase.co".into()), None);

    let result: Result<Vec<Project>, _> = store.get_all().await;

    assert!(matches!(result, Err(StorageError::Configuration(_))));
}
