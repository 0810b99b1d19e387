//! Word/bigram counting pipelines (spec.md §4.3/§4.4).

pub mod dict;
pub mod id_counter;
pub mod string_counter;
