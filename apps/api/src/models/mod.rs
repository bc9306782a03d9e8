pub mod feature;
pub mod profile;
