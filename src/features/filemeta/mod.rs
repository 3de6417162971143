//! File metadata inspection.
//!
//! Nothing is persisted: the uploaded payload is read, measured and dropped
//! with the request. The MIME type is taken from the client-declared part
//! header; the content is deliberately never sniffed, since clients depend
//! on the declared type being echoed back.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/fileanalyse` | Report name, type and size of one upload |

pub mod dtos;
pub mod handlers;
pub mod routes;
