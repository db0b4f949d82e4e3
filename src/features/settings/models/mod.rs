mod setting;

pub use setting::SiteSetting;
