//! Air quality data fetching.
//!
//! This module turns the three data service endpoints into engine events.
//!
//! # Architecture
//!
//! ```text
//! RefreshDaemon (interval loop, backoff on failed rounds)
//!     │
//!     └── FetchDispatcher (per-source sequence numbers)
//!             │
//!             ├── ReadingClient trait → HttpReadingClient (reqwest)
//!             │
//!             └── EngineClient
//!                     │
//!                     └── ReadingFetched / FetchFailed / RefreshStarted
//! ```
//!
//! The dispatcher stamps every fetch with a per-source sequence number at
//! dispatch time. The engine only accepts a result whose number is newer
//! than the last accepted one, which keeps a slow response from an old
//! round from overwriting fresher data.

mod client;
mod dispatcher;
mod error;
mod refresh;

pub use client::{
    HttpReadingClient, ReadingClient, ReadingDto, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT,
};
pub use dispatcher::FetchDispatcher;
pub use error::FetchError;
pub use refresh::RefreshDaemon;
