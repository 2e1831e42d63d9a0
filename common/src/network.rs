pub mod flow;
pub mod range;
