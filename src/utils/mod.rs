pub mod answers;
pub mod fs;
