//! Option/Result-style containers with database, JSON and panic-recovery adapters.
//!
//! The crate provides two sum types and the glue to use them as ordinary
//! struct fields:
//!
//! - [`Optional<T>`]: a value that may be absent (`Some`/`None`).
//! - [`Outcome<T>`]: a value or the error that prevented it (`Ok`/`Err`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  optional   │◀───▶│   outcome    │────▶│    traits     │
//! │ (Optional,  │     │  (Outcome,   │     │ (Unwrappable, │
//! │ OptionalRef)│     │  OutcomeRef) │     │ ValueContainer│
//! └─────────────┘     └──────────────┘     └───────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   sql (Scan, ToSqlValue)     json (serde, to_json)  │
//! └─────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │       catch (catch_unwrap: unwrap panic → Err)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! | Module     | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `optional` | `Optional<T>` and the borrowed `OptionalRef` handle |
//! | `outcome`  | `Outcome<T>` and the borrowed `OutcomeRef` handle  |
//! | `traits`   | Shared capabilities and free-function helpers      |
//! | `sql`      | Scanning from / storing to database values         |
//! | `json`     | serde support and byte-level JSON helpers          |
//! | `catch`    | Converting unwrap panics into empty/error results  |
//! | `assert`   | Null, condition and equality preconditions         |
//! | `logger`   | Line logging with console/file/null/tracing sinks  |
//!
//! # Usage
//!
//! ```
//! use optres::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::from(raw.parse::<u16>())
//! }
//!
//! let port = parse_port("8080");
//! assert_eq!(port.unwrap_or(80), 8080);
//! assert!(parse_port("http").ok().is_none());
//!
//! let name: Optional<&str> = none();
//! assert_eq!(name.unwrap_or("anonymous"), "anonymous");
//! ```

pub mod assert;
pub mod catch;
pub mod error;
pub mod json;
pub mod logger;
pub mod optional;
pub mod outcome;
pub mod panic;
pub mod sql;
pub mod traits;

pub mod testing;

// Re-exports for public API
pub use catch::{catch_unwrap, recover, CatchTarget};
pub use error::{as_crate_error, BoxError, DynError, Error};
pub use optional::{Optional, OptionalRef};
pub use outcome::{Outcome, OutcomeRef};
pub use panic::{ContainerKind, UnwrapPanic};
pub use sql::{AsText, FromSqlValue, Scan, SqlValue, ToSqlValue};
pub use traits::{
    err, expect, has_value, none, ok, some, unwrap, unwrap_or, unwrap_or_default,
    unwrap_or_else, Unwrappable, ValueContainer,
};

/// Everything needed to build and consume containers.
pub mod prelude {
    pub use crate::catch::{catch_unwrap, recover};
    pub use crate::error::Error;
    pub use crate::optional::{Optional, OptionalRef};
    pub use crate::outcome::{Outcome, OutcomeRef};
    pub use crate::traits::{err, none, ok, some, Unwrappable, ValueContainer};
}
