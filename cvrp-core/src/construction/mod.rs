//! Contains route construction logic: the Clarke–Wright savings heuristic and
//! the optional stop limit splitter.

mod savings;
pub use self::savings::create_savings_routes;

mod limits;
pub use self::limits::split_by_stop_limit;
