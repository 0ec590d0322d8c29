//! Per-test fixture shared by the suites in this directory.
//!
//! Each test builds its own `Fixture`, which owns one `ApiClient`. By default
//! the client talks to a fresh stub service on an ephemeral port, so suites
//! never see each other's writes. Setting `ENSEK_BASE_URL` (and
//! `ENSEK_TOKEN`) points every suite at the live service instead.
//!
//! Fixture assumptions: orders `KNOWN_ORDER_ID` and `DELETABLE_ORDER_ID`
//! already exist on the target service. Nothing here creates them on the
//! live service.

#![allow(dead_code, unused_imports)]

use std::ops::Deref;
use std::sync::Once;

use ensek_core::config;
use ensek_core::{ApiClient, ClientConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

pub use mock_server::{DELETABLE_ORDER_ID, KNOWN_ORDER_ID};

pub const STUB_TOKEN: &str = "stub-token";
pub const MISSING_ORDER_ID: Uuid = Uuid::nil();

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Start the stub service on a random port and return a config bound to it.
fn start_stub() -> ClientConfig {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, STUB_TOKEN).await
        })
        .unwrap();
    });

    ClientConfig::new(&format!("http://{addr}"), STUB_TOKEN)
}

pub struct Fixture {
    name: &'static str,
    client: ApiClient,
}

impl Fixture {
    pub fn setup(name: &'static str) -> Self {
        init_tracing();
        let config = if config::base_url_override().is_some() {
            ClientConfig::from_env().expect("live ENSEK configuration")
        } else {
            start_stub()
        };
        info!("--- Test setup for {name} ---");
        Self {
            name,
            client: ApiClient::connect(config),
        }
    }
}

impl Deref for Fixture {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        &self.client
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.client.dispose();
        info!("--- Test cleanup for {} ---", self.name);
    }
}
