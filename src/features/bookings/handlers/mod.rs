pub mod booking_handler;

pub use booking_handler::{
    __path_create_booking, __path_list_bookings, __path_list_bookings_by_date,
    __path_list_my_bookings, __path_update_booking_status, create_booking, list_bookings,
    list_bookings_by_date, list_my_bookings, update_booking_status,
};
