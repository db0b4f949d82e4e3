mod category_dto;

pub use category_dto::{
    CategoryResponseDto, ClosingResponseDto, CreateCategoryDto, CreateClosingDto,
    UpdateCategoryDto,
};
