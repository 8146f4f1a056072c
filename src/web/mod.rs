//! Web server exposing the comparison API.
//!
//! Routes:
//!
//! - `GET /health` — liveness probe
//! - `POST /api/compare` — body `{"playlist_urls": [...]}` (2–20 URLs);
//!   returns the comparison result plus the engine analysis, or a JSON
//!   error with status 400 (bad request) / 502 (upstream failure)

pub mod server;
