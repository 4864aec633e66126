use anyhow::{Result, bail};
use poll_api::application::{
    ports::security::PasswordHasher,
    services::{ApplicationServices, SeedAccount},
};
use poll_api::config::AppConfig;
use poll_api::domain::{poll::PollRepository, user::UserRepository};
use poll_api::infrastructure::{
    repositories::{InMemoryPollRepository, InMemoryUserRepository},
    security::password::Argon2PasswordHasher,
};
use poll_api::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads .env as well, so RUST_LOG from the file reaches the filter below.
    let config = AppConfig::from_env()?;
    init_tracing();

    let poll_repo: Arc<dyn PollRepository> = Arc::new(InMemoryPollRepository::new());
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&poll_repo),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));

    if let Some(admin) = config.admin() {
        let seeded = services
            .auth
            .register_seed(SeedAccount {
                email: admin.email.clone(),
                password: admin.password.clone(),
                first_name: "Poll".into(),
                last_name: "Admin".into(),
            })
            .await;
        if seeded.is_failure() {
            bail!("could not seed admin account: {}", seeded.error());
        }
    } else {
        tracing::warn!("ADMIN_EMAIL not set; no account can log in");
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
