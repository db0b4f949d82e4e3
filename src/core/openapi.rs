use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::bookings::{dtos as bookings_dtos, handlers as bookings_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::courts::{dtos as courts_dtos, handlers as courts_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::features::settings::{dtos as settings_dtos, handlers as settings_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::modules::events::{ChangeEvent, ChangeOp};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Bookings
        bookings_handlers::create_booking,
        bookings_handlers::list_bookings,
        bookings_handlers::list_my_bookings,
        bookings_handlers::list_bookings_by_date,
        bookings_handlers::update_booking_status,
        // Categories and closings
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::list_closings,
        categories_handlers::create_closing,
        categories_handlers::delete_closing,
        // Courts
        courts_handlers::list_courts,
        courts_handlers::get_court,
        courts_handlers::create_court,
        courts_handlers::update_court,
        courts_handlers::delete_court,
        // News
        news_handlers::list_news,
        news_handlers::get_news,
        news_handlers::create_news,
        news_handlers::update_news,
        news_handlers::delete_news,
        // Settings
        settings_handlers::get_settings,
        settings_handlers::update_settings,
        // Users
        users_handlers::list_users,
        users_handlers::update_user_role,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Events
        crate::modules::events::routes::change_feed,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Bookings
            bookings_dtos::CreateBookingDto,
            bookings_dtos::UpdateBookingStatusDto,
            bookings_dtos::BookingResponseDto,
            ApiResponse<bookings_dtos::BookingResponseDto>,
            ApiResponse<Vec<bookings_dtos::BookingResponseDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateClosingDto,
            categories_dtos::ClosingResponseDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::ClosingResponseDto>,
            ApiResponse<Vec<categories_dtos::ClosingResponseDto>>,
            // Courts
            courts_dtos::CreateCourtDto,
            courts_dtos::UpdateCourtDto,
            courts_dtos::CourtResponseDto,
            ApiResponse<courts_dtos::CourtResponseDto>,
            ApiResponse<Vec<courts_dtos::CourtResponseDto>>,
            // News
            news_dtos::CreateNewsDto,
            news_dtos::UpdateNewsDto,
            news_dtos::NewsResponseDto,
            ApiResponse<news_dtos::NewsResponseDto>,
            ApiResponse<Vec<news_dtos::NewsResponseDto>>,
            // Settings
            settings_dtos::UpdateSettingsDto,
            settings_dtos::SettingsResponseDto,
            ApiResponse<settings_dtos::SettingsResponseDto>,
            // Users
            users_dtos::UpdateRoleDto,
            users_dtos::UpdateProfileDto,
            users_dtos::ProfileResponseDto,
            ApiResponse<users_dtos::ProfileResponseDto>,
            ApiResponse<Vec<users_dtos::ProfileResponseDto>>,
            // Events
            ChangeEvent,
            ChangeOp,
        )
    ),
    tags(
        (name = "bookings", description = "Court slot booking and status transitions"),
        (name = "categories", description = "Sport categories and closure windows"),
        (name = "courts", description = "Courts catalog"),
        (name = "news", description = "Facility news"),
        (name = "settings", description = "Site settings (public read, admin write)"),
        (name = "users", description = "Profile and role management (admin only)"),
        (name = "events", description = "Server-sent change notifications"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Courtside API",
        version = "0.1.0",
        description = "API documentation for the sports facility booking service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
