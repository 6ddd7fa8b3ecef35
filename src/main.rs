// src/main.rs
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yatube_core::application::{
    commands::users::EnsureUserCommand,
    ports::{ClockPort, SlugGeneratorPort, security::Authenticator},
    services::{ApplicationServices, Repositories},
};
use yatube_core::config::AppConfig;
use yatube_core::domain::user::{UserRepository, Username};
use yatube_core::infrastructure::{
    repositories::{
        InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
        InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
    },
    security::token::StaticTokenAuthenticator,
    time::SystemClock,
    util::TransliteratingSlugGenerator,
};
use yatube_core::presentation::http::{routes::build_router_with_origins, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // loads `.env` too, so RUST_LOG from it reaches the subscriber
    let config = AppConfig::from_env()?;
    init_tracing();

    let store = Arc::new(InMemoryStore::new());
    let user_repo: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository::new(Arc::clone(&store)));
    let repos = Repositories {
        users: Arc::clone(&user_repo),
        groups: Arc::new(InMemoryGroupRepository::new(Arc::clone(&store))),
        posts: Arc::new(InMemoryPostRepository::new(Arc::clone(&store))),
        comments: Arc::new(InMemoryCommentRepository::new(Arc::clone(&store))),
        follows: Arc::new(InMemoryFollowRepository::new(Arc::clone(&store))),
    };

    let mut tokens = Vec::with_capacity(config.accounts().len());
    for account in config.accounts() {
        tokens.push((account.token.clone(), Username::new(account.username.as_str())?));
    }
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(StaticTokenAuthenticator::new(tokens, Arc::clone(&user_repo)));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(TransliteratingSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        authenticator,
        clock,
        slugger,
        config.posts_per_page(),
    ));

    for account in config.accounts() {
        services
            .user_commands
            .ensure_user(EnsureUserCommand {
                username: account.username.clone(),
                is_staff: account.is_staff,
            })
            .await?;
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        posts_per_page = config.posts_per_page(),
        accounts = config.accounts().len(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
