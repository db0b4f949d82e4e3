mod court_service;

pub use court_service::CourtService;
