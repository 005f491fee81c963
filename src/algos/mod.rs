pub use self::algo::Algo;
pub use self::by_slot::BySlot;
pub use self::greedy::{Greedy, allocate_round};

mod algo;
mod by_slot;
pub mod eligibility;
mod greedy;
