pub mod dom;
pub mod memory;
