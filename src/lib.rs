//! This crate serves purely as an rest api abstraction for an activity roster server.
//! Additionally there is a canonical server implementation in the same repository.
//!
//! The server manages the rosters of extracurricular activities:
//! listing them, signing students up and removing them again.
//!
//! ## Usage
//! For the complete usage, see the serde structs in [`api`].
//! * `GET /` redirects (307) to the front-end at `/static/index.html`.
//! * `GET /activities` returns an [`api::ActivitiesResponse`] mapping names to [`api::Activity`].
//! * `POST /activities/{name}/signup?email=...` adds a participant, see [`api::EmailQuery`].
//! * `DELETE /activities/{name}/unregister?email=...` removes a participant.
//!
//! Successful mutations answer with an [`api::MessageResponse`],
//! failures with an [`api::ErrorResponse`] and a `400`, `404` or `422` status.
//!
//! ## State
//! All data lives in the memory of the server process.
//! The set of activities is fixed at startup, only the participant lists change.
//!
//! ## Security
//! The api does not include any authentication, anybody can sign anybody up.
//! Make sure it is only reachable from trusted hosts.

pub mod api;
