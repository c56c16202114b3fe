#[macro_use]
extern crate quickcheck_macros;

mod ordered_map;
mod priority_queue;
