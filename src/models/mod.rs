pub mod canonical_order;
pub mod curriculum;
pub mod loaders;

pub use canonical_order::{CanonicalOrder, DEFAULT_GROUPS};
pub use curriculum::{Curriculum, Difficulty, GroupRecord, ProblemRecord};
pub use loaders::{load_canonical_order, load_canonical_order_or_default};
