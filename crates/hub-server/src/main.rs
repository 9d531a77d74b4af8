use clap::Parser;

use hub_server::{AppState, HubServer, ServerConfig};
use hub_store::{ProfileStore, UserStore};
use hub_types::{NewUser, Role};

#[derive(Parser, Debug)]
#[command(name = "hub-server", about = "LinkHub HTTP server")]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let (state, store, _blob) = AppState::in_memory(config);

    // Seed the platform owner account so a fresh instance has a page.
    match store
        .insert_user(NewUser {
            username: "Owner".into(),
            email: "admin@example.com".into(),
            // The auth collaborator owns credentials; nothing here reads them.
            password_hash: String::new(),
            role: Role::Owner,
        })
        .await
    {
        Ok(owner) => {
            store.try_insert_default(owner.id).await?;
            tracing::info!(user = %owner.id, "seeded owner account");
        }
        Err(e) if e.is_conflict() => {}
        Err(e) => return Err(e.into()),
    }

    HubServer::new(state).serve().await?;
    Ok(())
}
