pub mod errors;
pub mod students;
