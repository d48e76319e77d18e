//! # Club Signup
//!
//! Client core for a club activity listing: fetch the catalog, render cards
//! with live rosters and availability, sign participants up and remove them
//! without reloading the whole list.
//!
//! ## Modules
//!
//! - [`catalog`]: Activity data model, decoded in server order
//! - [`api`]: Endpoint contract, error taxonomy and HTTP client
//! - [`view`]: View-state table and its render projection
//! - [`sync`]: The synchronizer running load, signup and unregister
//! - [`config`]: TOML + environment configuration (native)
//! - [`logging`]: tracing subscriber setup (native)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use club_signup::{
//!     shared_view, project_list, Config, HttpActivityClient, QueuedTimer, ViewStore,
//!     ViewSynchronizer,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     club_signup::logging::init(&config.logging)?;
//!
//!     let client = HttpActivityClient::new(&config.api)?;
//!     let timer = QueuedTimer::new();
//!     let sync = ViewSynchronizer::new(client, shared_view(), timer.clone())
//!         .notice_hide_after(config.notice.hide_after());
//!
//!     sync.load_catalog().await?;
//!     sync.signup("Chess Club", "student@example.com").await;
//!     println!("{:?}", sync.store().read(project_list));
//!
//!     // No event loop drives the timer here; hide the notice now
//!     timer.run_all();
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
pub mod sync;
pub mod view;

pub use catalog::{Activity, Catalog};

pub use api::{ActivityApi, ApiError, ApiResult, RawResponse, SignupResponse};

#[cfg(feature = "native")]
pub use api::HttpActivityClient;

pub use view::{
    project_card, project_list, select_options, CardState, CardView, ListView, LoadStatus, Notice,
    NoticeKind, RemovalControl, RosterRow, SelectOption, SignupForm, SignupPatch, ViewState,
};

pub use sync::{
    shared_view, NoticeTimer, QueuedTimer, SharedView, SignupOutcome, UnregisterOutcome,
    ViewStore, ViewSynchronizer,
};

#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LogFormat, LoggingConfig, NoticeConfig};
