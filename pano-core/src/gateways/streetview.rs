use pano_entities::{
    geo::Coordinate,
    panorama::{ImageData, PanoramaId},
};

/// The outcome of a single request to the panorama provider.
///
/// Distinguishes a genuine absence of coverage from a failed
/// request, although both are treated the same way during
/// discovery (see [`ProviderOutcome::found`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome<T> {
    /// The requested resource is available
    Found(T),
    /// The provider answered but has nothing to offer,
    /// e.g. no panorama at the requested location.
    NotAvailable,
    /// The request failed (network, timeout, HTTP status,
    /// malformed response, ...).
    TransientError(String),
}

impl<T> ProviderOutcome<T> {
    /// Collapses the outcome: errors count as "not found".
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotAvailable | Self::TransientError(_) => None,
        }
    }

    pub fn is_transient_error(&self) -> bool {
        matches!(self, Self::TransientError(_))
    }
}

pub trait PanoramaMetadataGateway {
    /// Looks up the panorama that is closest to the given position.
    fn lookup_panorama(&self, pos: &Coordinate) -> ProviderOutcome<PanoramaId>;
}

pub trait PanoramaImageGateway {
    fn fetch_panorama_image(&self, id: &PanoramaId) -> ProviderOutcome<ImageData>;
}

impl<T> PanoramaMetadataGateway for &T
where
    T: PanoramaMetadataGateway + ?Sized,
{
    fn lookup_panorama(&self, pos: &Coordinate) -> ProviderOutcome<PanoramaId> {
        (**self).lookup_panorama(pos)
    }
}

impl<T> PanoramaImageGateway for &T
where
    T: PanoramaImageGateway + ?Sized,
{
    fn fetch_panorama_image(&self, id: &PanoramaId) -> ProviderOutcome<ImageData> {
        (**self).fetch_panorama_image(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_count_as_not_found() {
        assert_eq!(Some(1), ProviderOutcome::Found(1).found());
        assert_eq!(None, ProviderOutcome::<u8>::NotAvailable.found());
        let err = ProviderOutcome::<u8>::TransientError("timeout".into());
        assert!(err.is_transient_error());
        assert_eq!(None, err.found());
    }
}
