use tzf_rs::DefaultFinder;

/// resolves the IANA timezone name at a location.
pub trait TimezoneLookup {
    /// None when no zone covers the location.
    fn timezone_at(&self, lon: f64, lat: f64) -> Option<String>;
}

/// offline lookup backed by the timezone boundaries bundled with `tzf-rs`.
/// building the finder loads the boundary data, so create one per process.
pub struct TzfTimezoneLookup {
    finder: DefaultFinder,
}

impl TzfTimezoneLookup {
    pub fn new() -> TzfTimezoneLookup {
        TzfTimezoneLookup {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfTimezoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfTimezoneLookup {
    fn timezone_at(&self, lon: f64, lat: f64) -> Option<String> {
        let name = self.finder.get_tz_name(lon, lat);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// used when a query has no use for timezones.
pub struct NoTimezoneLookup;

impl TimezoneLookup for NoTimezoneLookup {
    fn timezone_at(&self, _lon: f64, _lat: f64) -> Option<String> {
        None
    }
}
