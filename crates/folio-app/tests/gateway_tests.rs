// Rust guideline compliant 2026-10-18

//! Integration tests for admin mutations over in-memory collaborators.

use folio_app::memory::{MemoryAssetHost, MemoryAuth, MemoryDocumentStore};
use folio_app::{
    AdminMutationGateway, AppError, AuthProvider, ErrorCode, MediaFile, ProjectDraft,
    ProjectStore, UploadProfile,
};
use folio_core::{CategorySet, Mode, Project};
use std::sync::Arc;

struct Harness {
    documents: Arc<MemoryDocumentStore>,
    assets: Arc<MemoryAssetHost>,
    store: Arc<ProjectStore>,
    gateway: AdminMutationGateway,
}

async fn harness(projects: Vec<Project>) -> Harness {
    let auth = MemoryAuth::new([("admin@folio.test", "secret")]);
    let session = auth
        .sign_in("admin@folio.test", "secret")
        .await
        .expect("Failed to sign in");

    let documents = Arc::new(MemoryDocumentStore::with_projects(projects));
    let assets = Arc::new(MemoryAssetHost::new());
    let store = Arc::new(ProjectStore::new());
    store
        .load(documents.as_ref())
        .await
        .expect("Failed to load store");

    let gateway = AdminMutationGateway::new(
        session,
        documents.clone(),
        assets.clone(),
        store.clone(),
    );
    Harness {
        documents,
        assets,
        store,
        gateway,
    }
}

fn project(id: &str) -> Project {
    Project::new(id.to_string(), Mode::Std, "Brand".to_string(), format!("Project {id}"))
}

fn draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        mode: Mode::Lab,
        category: "Code".to_string(),
        title: title.to_string(),
        ..ProjectDraft::default()
    }
}

fn file(name: &str) -> MediaFile {
    MediaFile::new(name, vec![1, 2, 3])
}

#[tokio::test]
async fn test_bulk_delete_rejects_whole_batch_when_one_fails() {
    let h = harness(vec![project("a"), project("b"), project("c")]).await;
    h.documents.fail_delete("b");

    let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let result = h.gateway.bulk_delete(&ids).await;

    match result {
        Err(AppError::BulkDeleteFailed { failed, attempted }) => {
            assert_eq!(failed, vec!["b".to_string()]);
            assert_eq!(attempted, 3);
        }
        other => panic!("Expected BulkDeleteFailed, got {:?}", other),
    }

    // The others were dispatched too, and the store reflects the remote state.
    let remaining: Vec<String> = h.store.snapshot().into_iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec!["b".to_string()]);
}

#[tokio::test]
async fn test_bulk_delete_success_refreshes_store() {
    let h = harness(vec![project("a"), project("b"), project("c")]).await;
    let deleted = h
        .gateway
        .bulk_delete(&["a".to_string(), "c".to_string()])
        .await
        .expect("Failed to bulk delete");

    assert_eq!(deleted, 2);
    assert_eq!(h.store.snapshot().len(), 1);
    assert!(h.store.find("b").is_some());
}

#[tokio::test]
async fn test_bulk_delete_empty_is_noop() {
    let h = harness(vec![project("a")]).await;
    let calls = h.documents.list_calls();
    assert_eq!(h.gateway.bulk_delete(&[]).await.expect("Failed to run"), 0);
    assert_eq!(h.documents.list_calls(), calls);
}

#[tokio::test]
async fn test_delete_project_refetches() {
    let h = harness(vec![project("a"), project("b")]).await;
    let calls = h.documents.list_calls();

    h.gateway.delete_project("a").await.expect("Failed to delete");

    assert_eq!(h.documents.list_calls(), calls + 1);
    assert!(h.store.find("a").is_none());
}

#[tokio::test]
async fn test_create_project_uploads_in_order_and_applies_defaults() {
    let h = harness(Vec::new()).await;
    let id = h
        .gateway
        .create_project(
            draft("Shader Sketch"),
            Some(file("cover.jpg")),
            vec![file("one.png"), file("two.mp4")],
        )
        .await
        .expect("Failed to create");

    assert_eq!(
        h.assets.uploads(),
        vec![
            (UploadProfile::Thumbnails, "cover.jpg".to_string()),
            (UploadProfile::Details, "one.png".to_string()),
            (UploadProfile::Details, "two.mp4".to_string()),
        ]
    );

    let created = h.store.find(&id).expect("Project missing from store");
    assert_eq!(created.mode, Mode::Lab);
    assert_eq!(
        created.thumbnail.as_deref(),
        Some("memory://portfolio/thumbnails/cover.jpg")
    );
    assert_eq!(created.sub_images.len(), 2);
    assert_eq!(created.role.as_deref(), Some("Design"));
    assert_eq!(created.client.as_deref(), Some("Client"));
    assert_eq!(created.date, Some(folio_app::current_year()));
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_create_project_keeps_supplied_metadata() {
    let h = harness(Vec::new()).await;
    let mut input = draft("Poster Series");
    input.date = Some("2021".to_string());
    input.role = Some("Art Direction".to_string());
    input.client = Some("  ".to_string());

    let id = h
        .gateway
        .create_project(input, Some(file("cover.jpg")), Vec::new())
        .await
        .expect("Failed to create");

    let created = h.gateway.get_project(&id).await.expect("Failed to get");
    assert_eq!(created.date.as_deref(), Some("2021"));
    assert_eq!(created.role.as_deref(), Some("Art Direction"));
    assert_eq!(created.client.as_deref(), Some("Client"));
}

#[tokio::test]
async fn test_create_project_aborts_on_upload_failure() {
    let h = harness(Vec::new()).await;
    h.assets.fail_file("two.png");

    let result = h
        .gateway
        .create_project(
            draft("Broken"),
            Some(file("cover.jpg")),
            vec![file("one.png"), file("two.png"), file("three.png")],
        )
        .await;

    assert!(matches!(result, Err(AppError::Upload(_))));
    assert!(h.documents.projects().is_empty());
    // Uploads before the failure already landed; later ones never started.
    assert_eq!(h.assets.uploads().len(), 2);
}

#[tokio::test]
async fn test_create_project_validation() {
    let h = harness(Vec::new()).await;

    let missing_thumb = h.gateway.create_project(draft("T"), None, Vec::new()).await;
    assert_eq!(
        missing_thumb.expect_err("Expected failure").code(),
        ErrorCode::ValidationError
    );

    let blank_title = h
        .gateway
        .create_project(draft("  "), Some(file("c.jpg")), Vec::new())
        .await;
    assert!(matches!(blank_title, Err(AppError::Validation(_))));
    assert!(h.assets.uploads().is_empty());
}

#[tokio::test]
async fn test_append_media_extends_sub_images() {
    let mut existing = project("a");
    existing.sub_images = vec!["old.jpg".to_string()];
    let h = harness(vec![existing]).await;

    let images = h
        .gateway
        .append_media("a", vec![file("new.jpg")])
        .await
        .expect("Failed to append");

    assert_eq!(
        images,
        vec![
            "old.jpg".to_string(),
            "memory://portfolio/details/new.jpg".to_string()
        ]
    );
    assert_eq!(h.store.find("a").expect("Missing").sub_images, images);
}

#[tokio::test]
async fn test_append_media_missing_project() {
    let h = harness(Vec::new()).await;
    let err = h
        .gateway
        .append_media("ghost", vec![file("x.jpg")])
        .await
        .expect_err("Expected not found");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(h.assets.uploads().is_empty());
}

#[tokio::test]
async fn test_categories_default_then_add_remove() {
    let h = harness(Vec::new()).await;
    assert_eq!(h.documents.categories(), None);

    let set = h.gateway.categories().await.expect("Failed to read");
    assert_eq!(set, CategorySet::with_defaults());
    assert_eq!(h.documents.categories(), Some(CategorySet::with_defaults()));

    let set = h
        .gateway
        .add_category(Mode::Std, "  Motion ")
        .await
        .expect("Failed to add");
    assert_eq!(set.std.last().map(String::as_str), Some("Motion"));

    let again = h
        .gateway
        .add_category(Mode::Std, "Motion")
        .await
        .expect("Failed to add");
    assert_eq!(again.std.iter().filter(|c| *c == "Motion").count(), 1);

    let unchanged = h.gateway.add_category(Mode::Lab, "   ").await.expect("Failed to add");
    assert_eq!(unchanged.lab, CategorySet::with_defaults().lab);

    let set = h
        .gateway
        .remove_category(Mode::Lab, "Code")
        .await
        .expect("Failed to remove");
    assert_eq!(set.lab, vec!["Interaction", "Experiment"]);
    assert_eq!(h.store.categories_for(Mode::Lab), set.lab);
}

#[tokio::test]
async fn test_delete_project_succeeds_when_refresh_fails() {
    let h = harness(vec![project("a"), project("b")]).await;
    h.documents.set_listing_fails(true);

    h.gateway
        .delete_project("a")
        .await
        .expect("Delete landed, so the call must succeed");

    assert_eq!(h.documents.projects().len(), 1);
    assert!(h.store.find("a").is_some());

    h.documents.set_listing_fails(false);
    h.store
        .refresh(h.documents.as_ref())
        .await
        .expect("Failed to refresh");
    assert!(h.store.find("a").is_none());
}

#[tokio::test]
async fn test_backend_outage_surfaces_error() {
    let h = harness(vec![project("a")]).await;
    h.documents.set_unavailable(true);

    let err = h.gateway.delete_project("a").await.expect_err("Expected failure");
    assert_eq!(err.code(), ErrorCode::BackendError);
    assert!(!err.notice().is_empty());
    assert!(h.store.find("a").is_some());
}
