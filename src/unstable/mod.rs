// Sorts that give no ordering guarantee among equal elements.

pub mod insertion_binary;
pub mod quicksort;
pub mod rahmani;
