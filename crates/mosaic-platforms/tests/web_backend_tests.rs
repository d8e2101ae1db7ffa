//! Bundle lifecycle tests for the web backend

use camino::Utf8PathBuf;
use mosaic_core::{BuildContext, Manifest, ProjectLayout};
use mosaic_platforms::web::WebPlatform;
use mosaic_platforms::Platform;

fn project_with_app() -> (tempfile::TempDir, ProjectLayout, Manifest) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let layout = ProjectLayout::new(root);

    std::fs::create_dir_all(layout.app()).unwrap();
    std::fs::write(layout.app().join("main.js"), "export default 42;\n").unwrap();

    let mut manifest = Manifest::new("demo");
    manifest.add_platform("web");
    (dir, layout, manifest)
}

fn build_context(layout: &ProjectLayout, manifest: &Manifest) -> BuildContext {
    BuildContext {
        out: layout.out_dir("web"),
        app: layout.app(),
        framework: layout.framework(),
        lib: layout.lib(),
        manifest: manifest.clone(),
    }
}

#[tokio::test]
async fn build_produces_bundle() {
    let (_guard, layout, manifest) = project_with_app();
    let ctx = build_context(&layout, &manifest);

    let out = WebPlatform::new().build(&ctx).await.unwrap();

    assert_eq!(out, layout.out_dir("web"));
    assert!(out.join("app/main.js").is_file());
    assert!(out.join("index.html").is_file());
    assert!(out.join("mosaic.json").is_file());

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("app/main.js"));
}

#[tokio::test]
async fn build_includes_optional_roots_when_present() {
    let (_guard, layout, manifest) = project_with_app();
    std::fs::create_dir_all(layout.lib()).unwrap();
    std::fs::write(layout.lib().join("util.js"), "// shared\n").unwrap();

    let ctx = build_context(&layout, &manifest);
    let out = WebPlatform::new().build(&ctx).await.unwrap();

    assert!(out.join("lib/util.js").is_file());
    assert!(!out.join("mosaic").exists());
}

#[tokio::test]
async fn build_is_idempotent_and_replaces_stale_artifacts() {
    let (_guard, layout, manifest) = project_with_app();
    let ctx = build_context(&layout, &manifest);
    let backend = WebPlatform::new();

    let out = backend.build(&ctx).await.unwrap();
    std::fs::write(out.join("stale.txt"), "left over").unwrap();

    let out = backend.build(&ctx).await.unwrap();
    assert!(!out.join("stale.txt").exists());
    assert!(out.join("app/main.js").is_file());
}

#[tokio::test]
async fn build_fails_without_app_sources() {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let layout = ProjectLayout::new(root);
    let manifest = Manifest::new("empty");

    let ctx = build_context(&layout, &manifest);
    let err = WebPlatform::new().build(&ctx).await.unwrap_err();
    assert!(err.to_string().contains("Application sources"), "got: {err}");
}
