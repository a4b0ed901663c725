pub mod check;
pub mod chips;
pub mod tree;
