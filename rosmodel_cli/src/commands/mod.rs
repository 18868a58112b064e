pub mod list;
pub mod node;
