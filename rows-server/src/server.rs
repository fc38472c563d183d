use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{routes, store::RowStore};

/// Serves the row API on an already-bound listener.
pub struct Server {
    listener: TcpListener,
    store: Arc<RowStore>,
}

impl Server {
    pub fn new(listener: TcpListener, store: RowStore) -> Self {
        Self {
            listener,
            store: Arc::new(store),
        }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Handle to the store backing this server, for inspection from outside
    /// the HTTP surface.
    pub fn store(&self) -> Arc<RowStore> {
        Arc::clone(&self.store)
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight
    /// requests and returns.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, store } = self;
        let app = routes::router(store);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("rows server shutting down");
            })
            .await?;

        Ok(())
    }

    pub async fn run_until_ctrl_c(self) -> Result<()> {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn stops_when_shutdown_resolves() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let server = Server::new(listener, RowStore::new());
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(server.run_until(async move {
            let _ = shutdown_rx.await;
        }));

        let _ = shutdown_tx.send(());
        let result = timeout(Duration::from_secs(2), handle)
            .await
            .expect("server should stop promptly")
            .expect("server task");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn exposes_its_store() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let server = Server::new(listener, RowStore::seeded());

        assert_eq!(server.store().len().await, 2);
    }
}
