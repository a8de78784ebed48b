//! Serving with a bounded graceful shutdown

use std::{future::Future, future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain open connections
///
/// Connections still open `drain_timeout` after the signal are dropped.
///
/// # Errors
///
/// Returns an error if the listener fails.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let notify = Arc::clone(&draining);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);
            notify.notify_one();
        })
        .into_future();

    let deadline = async move {
        draining.notified().await;
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(timeout = ?drain_timeout, "Shutdown timeout elapsed, dropping open connections");
            Ok(())
        }
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
        sync::oneshot,
    };

    use super::*;

    async fn stalled() -> &'static str {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        "late"
    }

    async fn quick() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn open_connection_is_dropped_after_drain_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new().route("/slow", get(stalled));
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = rx.await;
            },
            Duration::from_millis(200),
        ));

        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream
            .write_all(b"GET /slow HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .expect("write");
        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(()).expect("signal");

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server stopped within the drain timeout")
            .expect("join");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn idle_server_stops_on_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new().route("/", get(quick));
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = rx.await;
            },
            Duration::from_secs(30),
        ));

        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .expect("write");
        let mut response = String::new();
        stream.read_to_string(&mut response).await.expect("read");
        assert!(response.ends_with("ok"));

        tx.send(()).expect("signal");
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server stopped promptly")
            .expect("join");
        assert!(result.is_ok());
    }
}
