use serde::Deserialize;

/// Subset of a Nominatim `reverse` (jsonv2) response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<GeocodedAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodedAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
}

impl GeocodedAddress {
    /// First non-blank label, most specific first.
    pub fn locality(&self) -> Option<&str> {
        [
            &self.city,
            &self.town,
            &self.village,
            &self.municipality,
            &self.county,
            &self.state,
        ]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .map(str::trim)
        .find(|v| !v.is_empty())
    }
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.6}, {longitude:.6}")
}

fn first_segment(display_name: &str) -> Option<&str> {
    display_name
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Picks the label shown for a coordinate pair.
///
/// `lookup` is `None` when the reverse-geocoding call failed. The result is
/// never empty: it degrades to the stored address and then to the raw
/// coordinates.
pub fn resolve_place_name(
    lookup: Option<&ReverseGeocodeResponse>,
    stored_address: Option<&str>,
    latitude: f64,
    longitude: f64,
) -> String {
    let resolved = lookup.and_then(|response| {
        let address = response.address.as_ref()?;
        address
            .locality()
            .or_else(|| response.display_name.as_deref().and_then(first_segment))
    });

    resolved
        .or_else(|| stored_address.map(str::trim).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format_coordinates(latitude, longitude))
}
