mod court_dto;

pub use court_dto::{CourtQuery, CourtResponseDto, CreateCourtDto, UpdateCourtDto};
