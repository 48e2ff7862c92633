//! # Species Stat Web
//!
//! JSON API for the follow-list survey.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -p species-stat-web -- --port 3000
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/health` | Liveness |
//! | GET | `/api/taxonomy` | Categories, choices and baseline percentages |
//! | POST | `/api/users` | Register a subject |
//! | GET | `/api/users/:username` | Survey status and next step |
//! | PUT | `/api/users/:username/userinfo` | Declare own species |
//! | POST | `/api/users/:username/contacts` | Import contact list |
//! | GET | `/api/users/:username/pending` | Unclassified contacts |
//! | POST | `/api/users/:username/responses` | Record classifications |
//! | GET | `/api/results/:result_id` | Deviation rows and text summary |
//!
//! Authentication is handled upstream; the username in the path is trusted.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
