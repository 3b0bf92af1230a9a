use cookiebridge::{Cookie, CookieManager};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let manager = CookieManager::new();

    println!("--- Step 1: Setting cookie ---");
    let mut cookie = Cookie::new("demo", "42");
    cookie.domain = Some("example.com".to_string());
    cookie.secure = Some(true);
    cookie.expires = Some("2030-01-01T00:00:00.000+00:00".to_string());
    manager.set_cookie("https://example.com", &cookie, false).await?;
    println!("Stored: {cookie:?}");

    println!("\n--- Step 2: Reading it back ---");
    let cookies = manager.get_cookies("https://example.com/app", false).await?;
    for (name, cookie) in &cookies {
        println!("{name} = {} (secure: {:?})", cookie.value, cookie.secure);
    }

    println!("\n--- Step 3: Session cleanup ---");
    manager
        .set_cookie("https://example.com", &Cookie::new("ephemeral", "1"), false)
        .await?;
    let removed = manager.remove_session_cookies().await?;
    println!("Removed session cookies: {removed}");

    let remaining = manager.get_all(false).await?;
    println!("Remaining: {:?}", remaining.keys().collect::<Vec<_>>());

    Ok(())
}
