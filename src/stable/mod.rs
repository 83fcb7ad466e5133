// Sorts that guarantee a stable order among equal elements.

pub mod insertion_sequential;
pub mod mergesort;
