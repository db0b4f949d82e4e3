pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_create_closing, __path_delete_category, __path_delete_closing,
    __path_get_category, __path_list_categories, __path_list_closings, __path_update_category,
    create_category, create_closing, delete_category, delete_closing, get_category,
    list_categories, list_closings, update_category,
};
