pub mod reaction;
pub mod role;
pub mod species;
