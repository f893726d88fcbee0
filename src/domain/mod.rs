// Domain types and value objects
mod category;
mod region;
mod section;

// Re-export commonly used types to the world
pub use category::Category;
pub use region::Region;
pub use section::Section;
