//! Slot packing, rotation search, and KPI evaluation.
//!
//! # Algorithm
//!
//! `SlotPacker` makes one greedy first-fit pass, pairing each unplaced
//! round with the first compatible round in the list. `SlotSolver`
//! re-runs the packer over a linear walk of orderings until one fits the
//! slot ceiling, then stamps consecutive one-hour windows. Neither is
//! optimal; both are cheap and deterministic.
//!
//! # KPI
//!
//! `ScheduleKpi` reports slot usage, pairing rate, and distance from the
//! ceil(n/2) lower bound.

mod kpi;
mod packer;
mod solver;

pub use kpi::ScheduleKpi;
pub use packer::{Packing, SlotPacker};
pub use solver::{ScheduleRequest, SlotSolver};
