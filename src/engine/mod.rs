//! The reconciliation and reporting engine.
//! Pure functions over already-fetched collections: no shared state, no I/O.

pub mod pipeline;
pub mod reconcile;

pub use pipeline::{
    distinct_vaccine_options, filter_by_vaccine, paginate, search_filter, sort_by_date, Direction,
    ALL_VACCINES,
};
pub use reconcile::{build_report_rows, compute_stats, upcoming_drives, DEFAULT_HORIZON_DAYS};
