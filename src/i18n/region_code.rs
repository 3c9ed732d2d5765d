pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";    
    }

    /// Whether `region_code` names an actual region, i.e. is neither empty
    /// nor the "unknown" placeholder.
    pub fn is_known(region_code: &str) -> bool {
        !region_code.is_empty() && region_code != Self::get_unknown()
    }
}
