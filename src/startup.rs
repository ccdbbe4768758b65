//! Application Startup
//!
//! Storage selection, state wiring and server initialization.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    CompanyService, CompanyServiceImpl, InvoiceService, InvoiceServiceImpl,
};
use crate::config::{CorsSettings, DatabaseBackend, Settings};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryStore, PgCompanyRepository, PgInvoiceRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, create_trace_layer};

/// Backing store for the repositories
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory(InMemoryStore),
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyService>,
    pub invoices: Arc<dyn InvoiceService>,
}

impl AppState {
    pub fn new(companies: Arc<dyn CompanyService>, invoices: Arc<dyn InvoiceService>) -> Self {
        Self {
            companies,
            invoices,
        }
    }

    /// Wire services over the given storage
    pub fn from_storage(storage: &Storage) -> Self {
        match storage {
            Storage::Postgres(pool) => {
                let company_repo = Arc::new(PgCompanyRepository::new(pool.clone()));
                let invoice_repo = Arc::new(PgInvoiceRepository::new(pool.clone()));
                Self::new(
                    Arc::new(CompanyServiceImpl::new(company_repo.clone())),
                    Arc::new(InvoiceServiceImpl::new(invoice_repo, company_repo)),
                )
            }
            Storage::Memory(store) => {
                let company_repo = Arc::new(store.companies());
                let invoice_repo = Arc::new(store.invoices());
                Self::new(
                    Arc::new(CompanyServiceImpl::new(company_repo.clone())),
                    Arc::new(InvoiceServiceImpl::new(invoice_repo, company_repo)),
                )
            }
        }
    }
}

/// Assemble the router with its middleware stack
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors::create_cors_layer(cors_settings))
}

/// Open the storage backend selected in the settings
pub async fn connect_storage(settings: &Settings) -> Result<Storage> {
    match settings.database.backend {
        DatabaseBackend::Postgres => {
            let pool = database::create_pool(&settings.database)
                .await
                .context("Failed to create database pool")?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            Ok(Storage::Postgres(pool))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Storage::Memory(InMemoryStore::new()))
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let storage = connect_storage(&settings).await?;
        let state = AppState::from_storage(&storage);
        let router = build_router(state, &settings.cors);

        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
