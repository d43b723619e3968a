use crate::utils::Float;

/// Represents a travel distance. All distances flowing through the solver are
/// kept in kilometers: converting at the boundary avoids mixing units inside
/// the ordering algorithms.
pub type Distance = Float;

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lng: Float,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Checks that the coordinate lies within the valid geographic range.
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lng)
    }
}
