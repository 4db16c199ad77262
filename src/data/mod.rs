pub mod questions;
pub mod sleep;
pub mod weak_areas;

pub use questions::{Category, Question};
