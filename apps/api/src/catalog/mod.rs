// Reference skill catalog: role → expected skills, and the gap analysis over it.
// The catalog is re-read for every analysis; nothing here is cached.

pub mod analyzer;
pub mod handlers;
pub mod loader;
