mod news;

pub use news::NewsPost;
