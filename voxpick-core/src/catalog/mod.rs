pub mod filter;
pub mod types;

pub use filter::{compare_names, filter_voices, FilterState, GenderFilter};
pub use types::{Gender, Language, Voice};
