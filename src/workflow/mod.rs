pub mod group_ctx;
pub mod group_navigator;

pub use group_ctx::GroupCtx;
pub use group_navigator::{ExpandedGroup, GroupNavigator, Rows};
