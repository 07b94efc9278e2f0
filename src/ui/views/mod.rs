pub mod check;
pub mod selection;
