pub mod recency_list;
pub mod slot_arena;

pub use recency_list::RecencyList;
pub use slot_arena::{NodeId, SlotArena};
