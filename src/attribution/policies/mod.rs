mod display_name;

pub use display_name::DisplayNamePolicy;
