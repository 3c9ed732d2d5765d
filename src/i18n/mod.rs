mod country_names;
mod region_code;

pub use country_names::country_name_for_region;
pub use region_code::RegionCode;
