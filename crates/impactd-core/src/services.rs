//! Catalog of proxied upstream services.
//!
//! Each variant names one third-party integration the gateway relays to,
//! with its base URL and whether the request must carry the NASA API
//! key. The catalog is the single place upstream endpoints are spelled
//! out; handlers and error messages refer to services by name.

/// A third-party data service the gateway proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamService {
    /// NASA NeoWs paginated asteroid catalog browse.
    NeoWsBrowse,
    /// NASA NeoWs single-asteroid lookup by id.
    NeoWsLookup,
    /// USGS ComCat earthquake event query.
    Earthquakes,
    /// USGS EPQS point elevation query.
    Elevation,
    /// JPL Small-Body Database lookup.
    Sbdb,
    /// NASA DONKI space-weather notification feed.
    Donki,
    /// NASA image and video library search.
    NasaImages,
}

impl UpstreamService {
    /// Short name used in logs and error bodies.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NeoWsBrowse => "neows-browse",
            Self::NeoWsLookup => "neows-lookup",
            Self::Earthquakes => "usgs-earthquakes",
            Self::Elevation => "epqs-elevation",
            Self::Sbdb => "jpl-sbdb",
            Self::Donki => "donki-notifications",
            Self::NasaImages => "nasa-images",
        }
    }

    /// Base URL of the upstream endpoint.
    ///
    /// For [`Self::NeoWsLookup`] this is the collection root; the
    /// asteroid id is appended as a path segment via [`Self::neo_url`].
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::NeoWsBrowse => "https://api.nasa.gov/neo/rest/v1/neo/browse",
            Self::NeoWsLookup => "https://api.nasa.gov/neo/rest/v1/neo",
            Self::Earthquakes => "https://earthquake.usgs.gov/fdsnws/event/1/query",
            Self::Elevation => "https://epqs.nationalmap.gov/v1/json",
            Self::Sbdb => "https://ssd-api.jpl.nasa.gov/sbdb.api",
            Self::Donki => "https://api.nasa.gov/DONKI/notifications",
            Self::NasaImages => "https://images-api.nasa.gov/search",
        }
    }

    /// Whether requests to this service must carry the NASA API key.
    ///
    /// USGS and the image library are keyless; everything hosted under
    /// api.nasa.gov is keyed.
    #[must_use]
    pub const fn requires_api_key(self) -> bool {
        matches!(self, Self::NeoWsBrowse | Self::NeoWsLookup | Self::Donki)
    }

    /// Lookup URL for a single NEO by catalog id.
    #[must_use]
    pub fn neo_url(id: &str) -> String {
        format!("{}/{id}", Self::NeoWsLookup.endpoint())
    }
}
