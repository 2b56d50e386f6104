//! Test support: boots the API server on an ephemeral port.
//!
//! Each test gets its own listener on 127.0.0.1:0 served from a dedicated
//! thread, so wire-level tests run against a real socket and can execute in
//! parallel.

use contacts_api::repositories::{ContactStore, MemoryContactStore};
use contacts_api::server::{build_router, AppState};
use contacts_api::services::{ContactService, ContactServiceImpl};
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::thread;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Handle for a running test server. Shuts the server down on drop.
pub struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    /// Start a server over a store seeded with the reference contacts.
    pub fn start_seeded() -> Self {
        Self::start(Arc::new(MemoryContactStore::with_seed_data()))
    }

    /// Start a server over an empty store.
    pub fn start_empty() -> Self {
        Self::start(Arc::new(MemoryContactStore::new()))
    }

    fn start(store: Arc<dyn ContactStore>) -> Self {
        let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind test listener");
        listener
            .set_nonblocking(true)
            .expect("set test listener nonblocking");
        let addr = listener.local_addr().expect("test listener local addr");
        let base_url = format!("http://{}", addr);

        let service = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;
        let app = build_router(AppState::new(service));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let join = thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build test runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt test listener");
                let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                });
                let _ = server.await;
            });
        });

        Self {
            base_url,
            shutdown: Some(shutdown_tx),
            join: Some(join),
        }
    }

    /// Absolute URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}
