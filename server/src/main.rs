//! Pokemon Collection Server Entry Point

use anyhow::Context;
use clap::Parser;
use pokemon_collection::{
    api,
    auth::password::PasswordHasher,
    cli::{self, Cli, Commands},
    config, db, jwt_secret, logging, AppState,
};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init().context("failed to initialize logging")?;

    let cli = Cli::parse();
    let config = config::load_server_config().context("failed to load configuration")?;

    std::fs::create_dir_all(config::data_dir()?).context("failed to create data directory")?;

    info!("Pokemon Collection v{}", env!("CARGO_PKG_VERSION"));

    // データベース接続プールを作成（マイグレーション込み）
    let db_pool = db::migrations::initialize_database(&config.database_url)
        .await
        .context("failed to initialize database")?;

    // JWT秘密鍵を取得または生成
    let jwt_secret = jwt_secret::get_or_create_jwt_secret().context("failed to load JWT secret")?;

    let state = AppState {
        db_pool,
        jwt_secret,
        jwt_ttl: chrono::Duration::seconds(config.jwt_ttl_secs),
        password_hasher: PasswordHasher::new(config.bcrypt_cost),
    };

    match cli.command {
        Some(Commands::Account { command }) => {
            let output = cli::account::run(&state, command).await?;
            println!("{}", output);
            Ok(())
        }
        None => run_server(state, config.bind_addr()).await,
    }
}

async fn run_server(state: AppState, bind_addr: String) -> anyhow::Result<()> {
    info!(
        bcrypt_cost = state.password_hasher.cost(),
        jwt_ttl_secs = state.jwt_ttl.num_seconds(),
        "Authentication system initialized"
    );

    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", bind_addr))?;

    info!("Server listening on {}", bind_addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")
}
