//! Core domain types shared by all pipeline stages.

pub mod blocks;
pub mod category;
pub mod commit;
pub mod range;

pub use blocks::{ChangelogPayload, RenderBlock};
pub use category::{category_table, CategoryRule};
pub use commit::{BreakingChange, Note, ParsedCommit, RawCommit};
pub use range::{CommitRange, RangeEndpoint, RangeSelection};
