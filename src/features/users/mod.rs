//! User accounts for the exercise log.
//!
//! Users are create-then-immutable: there is no update endpoint, and the only
//! way a record disappears is the administrative bulk delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/users` | List all users |
//! | POST | `/api/users` | Create a user |
//! | GET | `/api/users/delete` | Delete every user (admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
