//! Store capability and persistence tests.

use std::sync::Arc;

use cookiebridge::{Cookie, CookieManager, WebViewCookieStore};
use tempfile::tempdir;

fn webview_backed_manager() -> CookieManager {
    CookieManager::builder()
        .system_store(Arc::new(WebViewCookieStore::new()))
        .build()
}

#[tokio::test]
async fn test_webview_store_cannot_enumerate() {
    let manager = webview_backed_manager();
    let err = manager.get_all(false).await.unwrap_err();
    assert_eq!(err.code(), "not_supported");
}

#[tokio::test]
async fn test_webview_store_cannot_remove_by_name() {
    let manager = webview_backed_manager();
    let err = manager
        .clear_by_name("https://example.com", "token", false)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "not_supported");
}

#[tokio::test]
async fn test_webview_store_still_answers_url_queries() {
    let manager = webview_backed_manager();
    manager
        .set_cookie("https://example.com", &Cookie::new("token", "abc"), false)
        .await
        .unwrap();

    let cookies = manager.get_cookies("https://example.com", false).await.unwrap();
    assert_eq!(cookies.get("token").unwrap().value, "abc");
}

#[tokio::test]
async fn test_webkit_jar_is_isolated_from_system_jar() {
    let manager = CookieManager::new();
    manager
        .set_cookie("https://example.com", &Cookie::new("wk", "1"), true)
        .await
        .unwrap();

    let system = manager.get_cookies("https://example.com", false).await.unwrap();
    assert!(system.is_empty());

    let webkit = manager.get_cookies("https://example.com", true).await.unwrap();
    assert!(webkit.contains_key("wk"));
}

#[tokio::test]
async fn test_persisted_system_store_survives_rebuild() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cookies.json");

    let manager = CookieManager::builder().persist_path(&path).build();
    manager
        .set_cookie("https://example.com", &Cookie::new("token", "abc"), false)
        .await
        .unwrap();
    manager.flush().await;

    let rebuilt = CookieManager::builder().persist_path(&path).build();
    let cookies = rebuilt.get_cookies("https://example.com", false).await.unwrap();
    assert_eq!(cookies.get("token").unwrap().value, "abc");
}
