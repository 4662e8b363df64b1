// Console smoke check against a running backend: login, unread count,
// active stream. Usage: api_smoke <username> <password>
use eglise_cfc::client::config::ClientConfig;
use eglise_cfc::client::services::chat_service::unread_count_for;
use eglise_cfc::client::services::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let username = args.next().unwrap_or_else(|| "admin".to_string());
    let password = args.next().unwrap_or_default();

    let config = ClientConfig::from_env();
    println!("API: {}", config.api_base_url);
    let services = Services::from_config(&config);

    let login = services.auth.login(&username, &password).await?;
    println!(
        "LOGIN -> {} (id {}, rôle {:?})",
        login.user.username, login.user.id, login.user.role
    );

    let unread = services.chat.fetch_unread().await?;
    println!("UNREAD -> {}", unread_count_for(login.user.id, &unread));

    match services.live.active().await? {
        Some(stream) => println!("ACTIVE LIVE -> {} ({:?})", stream.title, stream.status),
        None => println!("ACTIVE LIVE -> aucun"),
    }

    Ok(())
}
