pub mod find_many;
pub mod find_one;
