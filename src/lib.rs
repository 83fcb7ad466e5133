pub mod dataset;
pub mod stable;
pub mod unstable;
