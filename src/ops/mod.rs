//! Operator factories and the stage model behind pipeline reordering.
//!
//! Each factory returns an [`Operator`]: an immutable, reusable description
//! of one transformation of a collection. Operators carry no data — only
//! their own configuration — and are inert until [`crate::query`] applies
//! them. Every operator belongs to a [`Stage`], and stages have fixed ranks
//! that decide execution order regardless of the order the caller listed the
//! operators in:
//!
//! | Stage | rank | factory |
//! |---|---|---|
//! | `Filter` | 1 | [`filter_in`] |
//! | `Intersection` | 2 | [`and`] |
//! | `Union` | 3 | [`or`] |
//! | `Sort` | 4 | [`sort_by`] |
//! | `Project` | 5 | [`select`] |
//! | `Truncate` | 6 | [`limit`] |
//! | `Reformat` | 6 | [`format`] |
//!
//! `Truncate` and `Reformat` share a rank; the executor's stable sort keeps
//! their relative call order.
//!
//! ## Example
//!
//! ```rust
//! use recordpipe::{filter_in, limit, query, select, sort_by, Record, SortOrder, Value};
//!
//! let people = vec![
//!     Record::from_pairs([("name", Value::from("Ada")), ("age", Value::from(41))]),
//!     Record::from_pairs([("name", Value::from("Grace")), ("age", Value::from(36))]),
//!     Record::from_pairs([("name", Value::from("Edsger")), ("age", Value::from(41))]),
//! ];
//!
//! // Listed "out of order" on purpose: stages fix the execution order.
//! let result = query(
//!     &people,
//!     &[
//!         limit(2),
//!         select(["name"]),
//!         sort_by("age", SortOrder::Ascending),
//!         filter_in("age", [Value::from(41), Value::from(36)]),
//!     ],
//! );
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].get("name"), Some(&Value::from("Grace")));
//! ```

pub mod combine;
pub mod filter;
pub mod format;
pub mod limit;
pub mod select;
pub mod sort;

use std::fmt;

use crate::types::{Record, Value};

pub use combine::{and, or};
pub use filter::filter_in;
pub use format::format;
pub use limit::limit;
pub use select::select;
pub use sort::{sort_by, SortOrder};

/// Pipeline stage an operator runs in.
///
/// Lower [`rank`](Stage::rank) runs earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Membership filtering ([`filter_in`]).
    Filter,
    /// Sequential narrowing over several filters ([`and`]).
    Intersection,
    /// Union over several filters ([`or`]).
    Union,
    /// Ordering ([`sort_by`]).
    Sort,
    /// Field projection ([`select`]).
    Project,
    /// Truncation ([`limit`]).
    Truncate,
    /// Per-field value rewriting ([`format`]).
    Reformat,
}

impl Stage {
    /// Execution rank; ascending means earlier.
    pub fn rank(self) -> u8 {
        match self {
            Stage::Filter => 1,
            Stage::Intersection => 2,
            Stage::Union => 3,
            Stage::Sort => 4,
            Stage::Project => 5,
            Stage::Truncate | Stage::Reformat => 6,
        }
    }

    /// Stable lower-case name, used in events and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Filter => "filter",
            Stage::Intersection => "intersection",
            Stage::Union => "union",
            Stage::Sort => "sort",
            Stage::Project => "project",
            Stage::Truncate => "truncate",
            Stage::Reformat => "reformat",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) enum OpKind {
    FilterIn {
        property: String,
        values: Vec<Value>,
    },
    And {
        filters: Vec<Operator>,
    },
    Or {
        filters: Vec<Operator>,
    },
    SortBy {
        property: String,
        order: SortOrder,
    },
    Select {
        fields: Vec<String>,
    },
    Limit {
        count: usize,
    },
    Format {
        property: String,
        formatter: Box<dyn Fn(&Value) -> Value>,
    },
}

/// One configured pipeline step, produced by an operator factory.
///
/// An operator owns only its configuration, never any data, so it can be
/// reused across any number of [`crate::query`] calls.
pub struct Operator {
    pub(crate) kind: OpKind,
}

impl Operator {
    /// The stage this operator runs in.
    pub fn stage(&self) -> Stage {
        match self.kind {
            OpKind::FilterIn { .. } => Stage::Filter,
            OpKind::And { .. } => Stage::Intersection,
            OpKind::Or { .. } => Stage::Union,
            OpKind::SortBy { .. } => Stage::Sort,
            OpKind::Select { .. } => Stage::Project,
            OpKind::Limit { .. } => Stage::Truncate,
            OpKind::Format { .. } => Stage::Reformat,
        }
    }

    /// Factory name, for error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self.kind {
            OpKind::FilterIn { .. } => "filter_in",
            OpKind::And { .. } => "and",
            OpKind::Or { .. } => "or",
            OpKind::SortBy { .. } => "sort_by",
            OpKind::Select { .. } => "select",
            OpKind::Limit { .. } => "limit",
            OpKind::Format { .. } => "format",
        }
    }

    /// Filter-shaped operators keep a subset of their input and may be
    /// combined by [`or`]/[`and`].
    pub(crate) fn is_filter(&self) -> bool {
        matches!(
            self.kind,
            OpKind::FilterIn { .. } | OpKind::And { .. } | OpKind::Or { .. }
        )
    }

    /// Apply this operator to an owned working collection.
    pub(crate) fn apply(&self, collection: Vec<Record>) -> Vec<Record> {
        match &self.kind {
            OpKind::FilterIn { property, values } => {
                filter::apply(property, values, collection)
            }
            OpKind::And { filters } => combine::apply_and(filters, collection),
            OpKind::Or { filters } => combine::apply_or(filters, collection),
            OpKind::SortBy { property, order } => sort::apply(property, *order, collection),
            OpKind::Select { fields } => select::apply(fields, collection),
            OpKind::Limit { count } => limit::apply(*count, collection),
            OpKind::Format {
                property,
                formatter,
            } => format::apply(property, formatter.as_ref(), collection),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name())
            .field("stage", &self.stage())
            .finish()
    }
}
