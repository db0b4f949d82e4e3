pub mod court_handler;

pub use court_handler::{
    __path_create_court, __path_delete_court, __path_get_court, __path_list_courts,
    __path_update_court, create_court, delete_court, get_court, list_courts, update_court,
};
