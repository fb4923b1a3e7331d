pub mod set;
pub mod split;

pub use set::Set;
pub use split::SplitSet;
