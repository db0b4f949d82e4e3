mod news_dto;

pub use news_dto::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
