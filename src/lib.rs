//! # dreamapp-loadtest
//!
//! A [Goose](https://docs.rs/goose/0.18) load test that simulates authenticated
//! users of the DreamApp REST API.
//!
//! Each simulated user logs in once at startup, stores the returned bearer
//! token, and then issues a weighted random mix of GET/POST/PUT requests with
//! a uniform 1–10 second pause between them. Goose owns everything around the
//! task definitions: user spawning, scheduling, wait times, HTTP transport,
//! metrics aggregation, and reporting.
//!
//! ## Modules
//!
//! - **[`config`]** - Environment-variable run overrides (credentials, host, tag filter)
//! - **[`session`]** - Per-user token state and authorization header derivation
//! - **[`payload`]** - Randomized JSON payload builders for write operations
//! - **[`tasks`]** - Login plus the six weighted request transactions
//! - **[`registry`]** - Explicit task descriptor records and scenario assembly
//!
//! ## Quick start
//!
//! ```bash
//! cargo run --release -- --host https://dreamapp.example.com -u50 -r5 -t5m
//!
//! # Only run the read tasks
//! DREAMAPP_TAGS=get_last_news,get_friend_list,get_server \
//! cargo run --release -- --host https://dreamapp.example.com -u10 -r2 -t1m
//! ```
//!
//! All run parameters (host, user count, hatch rate, run time, report files)
//! come from Goose's own command line; see `--help`.

pub mod config;
pub mod payload;
pub mod registry;
pub mod session;
pub mod tasks;
