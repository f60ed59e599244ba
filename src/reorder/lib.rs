//! Optimistic reorder-and-persist protocol shared by every orderable list
//! (dashboards within a profile, cards within a dashboard).
//!
//! The pieces are wired leaves first:
//! [`drag_monitor`] reports moves, [`order_state`] applies them locally and
//! computes the [`diff`], and [`reconciliation`] sends the diff to the server
//! while keeping the list query cache in step.

pub mod diff;
pub mod drag_monitor;
pub mod instance;
pub mod order_state;
pub mod reconciliation;
pub mod types;

pub use drag_monitor::{DragMonitor, DragSource, DropEvent, DropTarget, Move};
pub use instance::InstanceId;
pub use order_state::OrderedList;
pub use reconciliation::{persist_reorder, Notifier, QueryCache, ReorderError, ReorderProcedure};
pub use types::{OrderObject, Orderable, ReorderRequest};
