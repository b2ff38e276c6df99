// Rust guideline compliant 2026-10-19

//! Integration tests for the CLI commands over a temporary site.

use folio_app::AppError;
use folio_cli::commands;
use folio_cli::commands::categories::CategoryChange;
use folio_cli::commands::list::Listing;
use folio_cli::commands::upload::UploadArgs;
use folio_cli::output::{JsonFormatter, PlainFormatter};
use folio_cli::SiteServices;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EMAIL: &str = "admin@studio.kr";
const PASSWORD: &str = "hunter2";

fn init_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    commands::init::execute(temp.path(), Some(EMAIL.to_string()), Some(PASSWORD.to_string()))
        .unwrap();
    temp
}

fn media(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn upload_args(dir: &Path, title: &str, date: &str) -> UploadArgs {
    UploadArgs {
        mode: "std".to_string(),
        category: "Poster".to_string(),
        title: title.to_string(),
        date: Some(date.to_string()),
        thumbnail: Some(media(dir, &format!("{title}.jpg"), title.as_bytes())),
        details: vec![
            media(dir, &format!("{title}-1.png"), b"one"),
            media(dir, &format!("{title}-2.mp4"), b"two"),
        ],
        ..UploadArgs::default()
    }
}

async fn login(root: &Path) {
    commands::auth::login(Some(root), EMAIL, PASSWORD).await.unwrap();
}

#[test]
fn test_init_is_idempotent() {
    let temp = init_site();
    let output = commands::init::execute(temp.path(), None, None).unwrap();
    assert!(output.contains(".folio"));

    let root = temp.path().join(".folio");
    assert!(root.join("projects.jsonl").exists());
    assert!(root.join("categories.json").exists());
    let config = std::fs::read_to_string(root.join("config.toml")).unwrap();
    assert!(config.contains(EMAIL));
    assert!(!config.contains(PASSWORD));
}

#[tokio::test]
async fn test_commands_require_initialized_site() {
    let temp = TempDir::new().unwrap();
    let err = commands::categories::show(Some(temp.path()), &PlainFormatter)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::SiteNotInitialized { .. })
    ));
}

#[tokio::test]
async fn test_admin_commands_require_login() {
    let temp = init_site();
    let args = upload_args(temp.path(), "Poster", "2024");
    let err = commands::upload::execute(Some(temp.path()), args).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Unauthorized)));

    let err = commands::delete::execute(Some(temp.path()), &["prj-000000".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let temp = init_site();
    let err = commands::auth::login(Some(temp.path()), EMAIL, "nope")
        .await
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Auth(_))));

    let whoami = commands::auth::whoami(Some(temp.path()), false).await.unwrap();
    assert_eq!(whoami, "Not signed in");
}

#[tokio::test]
async fn test_session_persists_until_logout() {
    let temp = init_site();
    login(temp.path()).await;

    let whoami = commands::auth::whoami(Some(temp.path()), false).await.unwrap();
    assert!(whoami.starts_with(EMAIL));

    commands::auth::logout(Some(temp.path())).await.unwrap();
    let whoami = commands::auth::whoami(Some(temp.path()), true).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&whoami).unwrap();
    assert!(value["session"].is_null());
}

#[tokio::test]
async fn test_upload_then_list_and_show() {
    let temp = init_site();
    login(temp.path()).await;

    let older = commands::upload::execute(Some(temp.path()), upload_args(temp.path(), "Older", "2021"))
        .await
        .unwrap();
    let newer = commands::upload::execute(Some(temp.path()), upload_args(temp.path(), "Newer", "2024"))
        .await
        .unwrap();

    let listing = commands::list::execute(Some(temp.path()), None, None, None, &JsonFormatter)
        .await
        .unwrap();
    let Listing::Projects(body) = listing else {
        panic!("expected projects");
    };
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["projects"][0]["id"], newer.as_str());
    assert_eq!(value["projects"][1]["id"], older.as_str());

    let shown = commands::show::execute(Some(temp.path()), &newer, &JsonFormatter)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(value["project"]["role"], "Design");
    assert_eq!(value["project"]["client"], "Client");
    let images = value["images"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    assert!(images[0].as_str().unwrap().contains("/thumbnails/"));
    assert!(images[2].as_str().unwrap().ends_with(".mp4"));

    let services = SiteServices::open(Some(temp.path())).await.unwrap();
    assert_eq!(services.store.snapshot().len(), 2);
}

#[tokio::test]
async fn test_list_empty_states() {
    let temp = init_site();
    login(temp.path()).await;
    commands::upload::execute(Some(temp.path()), upload_args(temp.path(), "Poster", "2024"))
        .await
        .unwrap();

    let listing = commands::list::execute(
        Some(temp.path()),
        None,
        None,
        Some("nothing like this".to_string()),
        &PlainFormatter,
    )
    .await
    .unwrap();
    assert_eq!(listing, Listing::Empty("No results for \"nothing like this\"".to_string()));

    let listing = commands::list::execute(
        Some(temp.path()),
        Some("lab".to_string()),
        None,
        None,
        &PlainFormatter,
    )
    .await
    .unwrap();
    assert!(matches!(listing, Listing::Empty(notice) if notice.starts_with("No projects in Lab")));
}

#[tokio::test]
async fn test_show_missing_project_reports_notice() {
    let temp = init_site();
    let err = commands::show::execute(Some(temp.path()), "prj-ffffff", &PlainFormatter)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Project not found.");
}

#[tokio::test]
async fn test_attach_appends_detail_media() {
    let temp = init_site();
    login(temp.path()).await;
    let id = commands::upload::execute(Some(temp.path()), upload_args(temp.path(), "Book", "2023"))
        .await
        .unwrap();

    let extra = media(temp.path(), "extra.gif", b"extra");
    let message = commands::attach::execute(Some(temp.path()), &id, &[extra])
        .await
        .unwrap();
    assert!(message.contains("3 detail item(s)"));
}

#[tokio::test]
async fn test_delete_single_and_bulk() {
    let temp = init_site();
    login(temp.path()).await;
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        ids.push(
            commands::upload::execute(Some(temp.path()), upload_args(temp.path(), title, "2022"))
                .await
                .unwrap(),
        );
    }

    let message = commands::delete::execute(Some(temp.path()), &ids[..1]).await.unwrap();
    assert_eq!(message, format!("Deleted {}", ids[0]));

    let message = commands::delete::execute(Some(temp.path()), &[ids[1].clone(), ids[2].clone(), ids[1].clone()])
        .await
        .unwrap();
    assert_eq!(message, "Deleted 2 projects");

    let services = SiteServices::open(Some(temp.path())).await.unwrap();
    assert!(services.store.snapshot().is_empty());
}

#[tokio::test]
async fn test_bulk_delete_reports_missing_ids() {
    let temp = init_site();
    login(temp.path()).await;
    let id = commands::upload::execute(Some(temp.path()), upload_args(temp.path(), "Keep", "2022"))
        .await
        .unwrap();

    let err = commands::delete::execute(Some(temp.path()), &[id.clone(), "prj-000000".to_string()])
        .await
        .unwrap_err();
    match err.downcast_ref::<AppError>() {
        Some(AppError::BulkDeleteFailed { failed, attempted }) => {
            assert_eq!(failed, &vec!["prj-000000".to_string()]);
            assert_eq!(*attempted, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_category_add_and_remove() {
    let temp = init_site();
    login(temp.path()).await;

    let output = commands::categories::change(
        Some(temp.path()),
        CategoryChange::Add,
        "lab",
        "Zine",
        &JsonFormatter,
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["lab"].as_array().unwrap().last().unwrap(), "Zine");

    commands::categories::change(
        Some(temp.path()),
        CategoryChange::Remove,
        "std",
        "Brand",
        &PlainFormatter,
    )
    .await
    .unwrap();

    let shown = commands::categories::show(Some(temp.path()), &JsonFormatter)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert!(!value["std"].as_array().unwrap().iter().any(|v| v == "Brand"));
    assert!(value["lab"].as_array().unwrap().iter().any(|v| v == "Zine"));
}

#[tokio::test]
async fn test_contact_queues_valid_message() {
    let temp = init_site();
    let message = commands::contact::execute(
        Some(temp.path()),
        "Kim",
        "kim@example.com",
        "Poster commission",
    )
    .await
    .unwrap();
    assert_eq!(message, "Message sent");

    let outbox = std::fs::read_to_string(temp.path().join(".folio").join("outbox.jsonl")).unwrap();
    let record: serde_json::Value = serde_json::from_str(outbox.lines().next().unwrap()).unwrap();
    assert_eq!(record["params"]["reply_to"], "kim@example.com");
    assert_eq!(record["params"]["from_name"], "Kim");
}

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let temp = init_site();
    let err = commands::contact::execute(Some(temp.path()), "Kim", "kim@example", "Hello")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid contact form (email: invalid format)");
    assert!(!temp.path().join(".folio").join("outbox.jsonl").exists());
}
