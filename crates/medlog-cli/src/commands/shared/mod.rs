pub mod draft;
pub mod limit;
