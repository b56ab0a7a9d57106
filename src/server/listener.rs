use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections until a bind or
/// accept error, which propagates to the caller and ends the server.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Accept loop over an already-bound listener.
///
/// Each connection is served by its own task. A semaphore sized by
/// `max_connections` bounds how many run at once: the owned permit is
/// acquired before the accept and held for the task's lifetime, so the
/// loop waits for a free slot before taking the next connection.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let slots = Arc::new(Semaphore::new(cfg.max_connections));

    loop {
        let permit = slots.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let directory = cfg.directory.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, directory);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
