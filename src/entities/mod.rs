pub mod location;
pub mod program;
