mod category;
mod closing;

pub use category::SportCategory;
pub use closing::CategoryClosing;
