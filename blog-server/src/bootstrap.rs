use std::net::SocketAddr;

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::infrastructure::database::create_pool;
use crate::infrastructure::schema::SchemaManager;
use crate::infrastructure::settings::Settings;
use crate::presentation::AppState;
use crate::server::{HttpServer, spawn_http};

/// A started blog backend: schema in place and, unless started backend-only, an HTTP server.
pub(crate) struct Blog {
    pool: PgPool,
    schema: SchemaManager,
    server: Option<HttpServer>,
}

/// Ensures the schema, then starts listening unless `just_backend` is set.
pub(crate) async fn up(settings: &Settings, just_backend: bool) -> Result<Blog> {
    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    let schema = SchemaManager::new(pool.clone(), settings.testing);
    schema.setup().await?;

    if just_backend {
        info!("backend-only mode, HTTP server not started");
        return Ok(Blog {
            pool,
            schema,
            server: None,
        });
    }

    let server = spawn_http(settings, AppState::from_pool(pool.clone())).await?;
    Ok(Blog {
        pool,
        schema,
        server: Some(server),
    })
}

/// Drops the schema when test mode is on. Otherwise does nothing and succeeds.
pub(crate) async fn tear_down(settings: &Settings) -> Result<()> {
    if !settings.testing {
        info!("not in test mode, tear down skipped");
        return Ok(());
    }

    let pool = create_pool(&settings.database_url, settings.database_max_connections).await?;
    SchemaManager::new(pool.clone(), true).teardown().await?;
    pool.close().await;
    Ok(())
}

impl Blog {
    pub(crate) fn local_addr(&self) -> Option<SocketAddr> {
        self.server.as_ref().map(HttpServer::local_addr)
    }

    /// Stops the server and drops the schema when test mode is on.
    #[cfg(test)]
    pub(crate) async fn tear_down(mut self) -> Result<()> {
        self.stop_server().await?;
        self.schema.teardown().await?;
        self.pool.close().await;
        Ok(())
    }

    /// Stops the server and closes the pool, keeping the schema.
    pub(crate) async fn shutdown(mut self) -> Result<()> {
        self.stop_server().await?;
        self.pool.close().await;
        Ok(())
    }

    async fn stop_server(&mut self) -> Result<()> {
        if let Some(server) = self.server.take() {
            server.stop().await?;
        }
        Ok(())
    }
}
