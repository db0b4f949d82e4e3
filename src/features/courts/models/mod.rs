mod court;

pub use court::Court;
