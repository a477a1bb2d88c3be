use anyhow::{Context, Result};
use easyrent::application::{
    commands::users::BootstrapAdminCommand,
    ports::{
        image_store::ImageStore,
        mailer::Mailer,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ApplicationSettings, Ports, Repositories},
};
use easyrent::config::AppConfig;
use easyrent::infrastructure::{
    database,
    mail::{LogMailer, SmtpMailer},
    repositories::{
        PostgresCategoryRepository, PostgresListingContactRepository,
        PostgresListingReadRepository, PostgresListingWriteRepository, PostgresLocationRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::{CloudinaryImageStore, NoopImageStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use easyrent::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to PostgreSQL")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        listing_write: Arc::new(PostgresListingWriteRepository::new(pool.clone())),
        listing_read: Arc::new(PostgresListingReadRepository::new(pool.clone())),
        listing_contacts: Arc::new(PostgresListingContactRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        locations: Arc::new(PostgresLocationRepository::new(pool)),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
        config.refresh_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let mailer: Arc<dyn Mailer> = match config.smtp() {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "using SMTP mailer");
            Arc::new(SmtpMailer::new(smtp, config.mail_from()).context("configuring SMTP")?)
        }
        None => {
            tracing::warn!("SMTP_HOST not set; outgoing email will only be logged");
            Arc::new(LogMailer)
        }
    };

    let image_store: Arc<dyn ImageStore> = match config.cloudinary() {
        Some(cloudinary) => Arc::new(
            CloudinaryImageStore::new(cloudinary.clone()).context("building HTTP client")?,
        ),
        None => {
            tracing::warn!("Cloudinary not configured; image cleanup disabled");
            Arc::new(NoopImageStore)
        }
    };

    let services = Arc::new(ApplicationServices::new(
        repos,
        Ports {
            password_hasher,
            token_manager,
            mailer,
            image_store,
            clock,
            slugger,
        },
        ApplicationSettings {
            public_base_url: config.public_base_url().to_string(),
            contact_inbox: config.contact_inbox().to_string(),
        },
    ));

    if let Some(admin) = config.admin() {
        let created = services
            .user_commands
            .ensure_admin(BootstrapAdminCommand {
                email: admin.email.clone(),
                password: admin.password.clone(),
            })
            .await?;
        if created {
            tracing::info!(email = %admin.email, "bootstrap admin created");
        }
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
