mod setting_dto;

pub use setting_dto::{SettingsResponseDto, UpdateSettingsDto};
