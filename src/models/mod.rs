//! Planning domain models.
//!
//! Provides the data types for pairing rounds into slots and the
//! resulting schedule.
//!
//! # Domain Mappings
//!
//! | slot-planner | Gaming | Tournaments | Interviews |
//! |--------------|--------|-------------|------------|
//! | Round | Game round | Match | Interview |
//! | Game | Table/Game | Court | Room |
//! | Player | User | Team | Candidate |
//! | Slot | Hour block | Time block | Session |

mod game;
mod round;
mod schedule;
mod slot;

pub use game::Game;
pub use round::Round;
pub use schedule::Schedule;
pub use slot::{slot_length, Slot, SlotWindow};
