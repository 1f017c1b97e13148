pub mod page;
pub mod quote;
pub mod variant;

pub use variant::Variant;
