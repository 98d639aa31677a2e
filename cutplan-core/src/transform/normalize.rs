//! Orientation normalization: long side on X.

use crate::error::{PlanError, Result};
use crate::model::{CutRequest, NormalizedCut};

/// Normalize one request so that `x >= y`.
///
/// Rejects a request with a non-positive or non-finite dimension before
/// reordering anything.
pub fn normalize(request: &CutRequest) -> Result<NormalizedCut> {
    let valid = |d: f64| d.is_finite() && d > 0.0;
    if !valid(request.width) || !valid(request.height) {
        return Err(PlanError::InvalidDimension {
            request_id: request.id,
            width: request.width,
            height: request.height,
        });
    }

    Ok(NormalizedCut {
        request_id: request.id,
        source_ref: request.source_ref.clone(),
        x: request.width.max(request.height),
        y: request.width.min(request.height),
    })
}

/// Normalize every request, failing on the first invalid one.
pub fn normalize_all(requests: &[CutRequest]) -> Result<Vec<NormalizedCut>> {
    requests.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_when_height_is_longer() {
        let cut = normalize(&CutRequest::new(0, "wall-24-30-12", 12.0, 30.0)).unwrap();
        assert_eq!((cut.x, cut.y), (30.0, 12.0));
        assert_eq!(cut.request_id, 0);
        assert_eq!(cut.source_ref, "wall-24-30-12");
    }

    #[test]
    fn test_keeps_landscape_and_square() {
        let cut = normalize(&CutRequest::new(1, "a", 22.5, 4.0)).unwrap();
        assert_eq!((cut.x, cut.y), (22.5, 4.0));

        let cut = normalize(&CutRequest::new(2, "a", 10.0, 10.0)).unwrap();
        assert_eq!((cut.x, cut.y), (10.0, 10.0));
    }

    #[test]
    fn test_long_side_always_on_x() {
        let requests: Vec<CutRequest> = [(1.0, 2.0), (5.5, 0.25), (48.0, 96.0), (3.0, 3.0)]
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| CutRequest::new(i, "r", w, h))
            .collect();

        for cut in normalize_all(&requests).unwrap() {
            assert!(cut.x >= cut.y);
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for (w, h) in [(0.0, 5.0), (5.0, -1.0), (f64::NAN, 5.0), (f64::INFINITY, 2.0)] {
            let err = normalize(&CutRequest::new(9, "bad", w, h)).unwrap_err();
            assert!(matches!(err, PlanError::InvalidDimension { request_id: 9, .. }));
        }
    }

    #[test]
    fn test_normalize_all_stops_at_first_invalid() {
        let requests = vec![
            CutRequest::new(0, "a", 10.0, 5.0),
            CutRequest::new(1, "a", -0.5, 4.0),
            CutRequest::new(2, "a", 0.0, 4.0),
        ];
        let err = normalize_all(&requests).unwrap_err();
        assert!(matches!(err, PlanError::InvalidDimension { request_id: 1, .. }));
    }
}
