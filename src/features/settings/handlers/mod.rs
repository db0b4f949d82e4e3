pub mod setting_handler;

pub use setting_handler::{__path_get_settings, __path_update_settings, get_settings, update_settings};
