//! `recordpipe` runs composable query pipelines over in-memory collections of
//! [`Record`]s (insertion-ordered maps from field name to scalar [`Value`]).
//!
//! Callers build operators with the factory functions and hand them to
//! [`query`] in any order: every operator belongs to a fixed execution
//! [`Stage`], and the executor stable-sorts by stage rank before folding the
//! operators over a copy of the collection. The caller's data is never
//! mutated.
//!
//! ## Operators
//!
//! - [`filter_in`]: keep records whose field value is in an allow-list
//! - [`and`] / [`or`]: boolean combination of filters (intersection / union)
//! - [`sort_by`]: stable ordering by one field
//! - [`select`]: field projection
//! - [`limit`]: truncation
//! - [`format`]: per-field value rewriting
//!
//! ## Quick example
//!
//! ```rust
//! use recordpipe::{filter_in, format, limit, query, select, sort_by, Record, SortOrder, Value};
//!
//! let friends = recordpipe::records_from_json(r#"[
//!     {"name":"Sam",   "age":29, "gender":"male"},
//!     {"name":"Sally", "age":30, "gender":"female"},
//!     {"name":"Bill",  "age":25, "gender":"male"},
//!     {"name":"Mat",   "age":27, "gender":"male"}
//! ]"#).unwrap();
//!
//! // Operator order does not matter; stages do.
//! let result = query(
//!     &friends,
//!     &[
//!         select(["name", "age"]),
//!         filter_in("gender", [Value::from("male")]),
//!         sort_by("age", SortOrder::Ascending),
//!         limit(2),
//!         format("name", |v| match v {
//!             Value::Str(s) => Value::Str(s.to_uppercase()),
//!             other => other.clone(),
//!         }),
//!     ],
//! );
//!
//! assert_eq!(result, vec![
//!     Record::from_pairs([("name", Value::from("BILL")), ("age", Value::from(25))]),
//!     Record::from_pairs([("name", Value::from("MAT")), ("age", Value::from(27))]),
//! ]);
//! ```
//!
//! ## Combining filters
//!
//! [`or`] and [`and`] take filter-shaped operators only and reject anything
//! else at construction:
//!
//! ```rust
//! use recordpipe::{and, filter_in, or, query, sort_by, SortOrder, Value};
//!
//! let friends = recordpipe::records_from_json(r#"[
//!     {"name":"Sam", "age":29},
//!     {"name":"Sally", "age":30}
//! ]"#).unwrap();
//!
//! let either = or([
//!     filter_in("age", [Value::from(29)]),
//!     filter_in("name", [Value::from("Sally")]),
//! ]).unwrap();
//! assert_eq!(query(&friends, &[either]).len(), 2);
//!
//! let both = and([
//!     filter_in("age", [Value::from(30)]),
//!     filter_in("name", [Value::from("Sally")]),
//! ]).unwrap();
//! assert_eq!(query(&friends, &[both]).len(), 1);
//!
//! assert!(or([sort_by("age", SortOrder::Ascending)]).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`types`]: [`Value`] / [`Record`] and JSON interop
//! - [`ops`]: operator factories and the [`Stage`] model
//! - [`set`]: structural set operations ([`set::distinct`], [`set::repetitions`])
//! - [`pipeline`]: the executor ([`query`], [`query_with_observer`])
//! - [`observe`]: observer hooks for pipeline events
//! - [`error`]: error types

pub mod error;
pub mod observe;
pub mod ops;
pub mod pipeline;
pub mod set;
pub mod types;

pub use error::{QueryError, QueryResult};
pub use observe::{CollectingObserver, QueryEvent, QueryObserver, StdErrObserver};
pub use ops::{and, filter_in, format, limit, or, select, sort_by, Operator, SortOrder, Stage};
pub use pipeline::{query, query_with_observer, SUPPORTS_COMBINATORS};
pub use types::{records_from_json, Record, Value};
