//! Background server handle for the fake API.

use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::thread::JoinHandle;

use axum::Router;
use tokio::sync::oneshot;
use tracing::{debug, error};

/// A router served on `127.0.0.1` from a dedicated thread.
///
/// Dropping the handle stops the server and joins its thread, so a test that
/// owns one cleans up on every exit path, panics included.
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl RunningServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!(addr = %self.addr, "server thread panicked");
            }
        }
    }
}

/// Serve `app` on a random local port.
pub fn spawn(app: Router) -> io::Result<RunningServer> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let thread = std::thread::Builder::new()
        .name(format!("mock-server-{}", addr.port()))
        .spawn(move || {
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(std_listener) {
                    Ok(listener) => listener,
                    Err(e) => {
                        error!(%addr, "failed to register listener: {}", e);
                        return;
                    }
                };
                tokio::select! {
                    result = axum::serve(listener, app).into_future() => {
                        if let Err(e) = result {
                            error!(%addr, "server stopped: {}", e);
                        }
                    }
                    _ = shutdown_rx => debug!(%addr, "shutting down"),
                }
            });
            // Dropping the runtime here cancels any connection still open.
        })?;

    debug!(%addr, "server listening");
    Ok(RunningServer {
        addr,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}
