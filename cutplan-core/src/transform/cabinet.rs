//! Cabinet to cut request translation.
//!
//! Each cabinet kind has a fixed formula table producing the rectangular
//! pieces needed to build the box:
//!
//! | Kind | Piece | Count | Dimensions |
//! |------|-------|-------|------------|
//! | base | side | 2 | depth x (height - 4) |
//! | base | bottom | 1 | (width - 1.5) x depth |
//! | base | toe kick face | 2 | width x 4 |
//! | base | toe kick side | 2 | (depth - 4.5) x 4 |
//! | base | nailer | 4 | (width - 1.5) x 4 |
//! | wall | side | 2 | depth x height |
//! | wall | top/bottom | 2 | (width - 1.5) x depth |
//! | wall | nailer | 2 | (width - 1.5) x 4 |

use crate::error::Result;
use crate::model::{Cabinet, CabinetKind, CutRequest};

/// Height of the toe kick recess.
const TOE_KICK_HEIGHT: f64 = 4.0;

/// Toe kick setback plus the face thickness it sits behind.
const TOE_KICK_SETBACK: f64 = 4.5;

/// Combined thickness of the two sides.
const SIDE_ALLOWANCE: f64 = 1.5;

/// Nailer strip width.
const NAILER_WIDTH: f64 = 4.0;

/// Translate every cabinet into cut requests, assigning ids densely from 0.
///
/// Stops at the first cabinet whose kind has no formula.
pub fn create_cut_requests(cabinets: &[Cabinet]) -> Result<Vec<CutRequest>> {
    let mut requests = Vec::new();

    for cabinet in cabinets {
        let pieces = cuts_for_cabinet(cabinet)?;
        let source_ref = cabinet.reference();
        tracing::debug!("{}: {} piece(s)", source_ref, pieces.len());

        for (width, height) in pieces {
            requests.push(CutRequest::new(
                requests.len(),
                source_ref.clone(),
                width,
                height,
            ));
        }
    }

    Ok(requests)
}

/// Raw piece dimensions for one cabinet, in formula order.
pub fn cuts_for_cabinet(cabinet: &Cabinet) -> Result<Vec<(f64, f64)>> {
    let (width, height, depth) = (cabinet.width, cabinet.height, cabinet.depth);
    let inner_width = width - SIDE_ALLOWANCE;

    let pieces = match cabinet.kind()? {
        CabinetKind::Base => {
            let side = (depth, height - TOE_KICK_HEIGHT);
            let bottom = (inner_width, depth);
            let kick_face = (width, TOE_KICK_HEIGHT);
            let kick_side = (depth - TOE_KICK_SETBACK, TOE_KICK_HEIGHT);
            let nailer = (inner_width, NAILER_WIDTH);
            vec![
                side, side, bottom, kick_face, kick_face, kick_side, kick_side, nailer, nailer,
                nailer, nailer,
            ]
        }
        CabinetKind::Wall => {
            let side = (depth, height);
            let top_bottom = (inner_width, depth);
            let nailer = (inner_width, NAILER_WIDTH);
            vec![side, side, top_bottom, top_bottom, nailer, nailer]
        }
    };

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wall_cabinet_pieces() {
        let cab = Cabinet::new("wall", 24.0, 30.0, 12.0);
        assert_eq!(
            cuts_for_cabinet(&cab).unwrap(),
            vec![
                (12.0, 30.0),
                (12.0, 30.0),
                (22.5, 12.0),
                (22.5, 12.0),
                (22.5, 4.0),
                (22.5, 4.0),
            ]
        );
    }

    #[test]
    fn test_base_cabinet_pieces() {
        let cab = Cabinet::new("base", 24.0, 34.5, 24.0);
        assert_eq!(
            cuts_for_cabinet(&cab).unwrap(),
            vec![
                (24.0, 30.5),
                (24.0, 30.5),
                (22.5, 24.0),
                (24.0, 4.0),
                (24.0, 4.0),
                (19.5, 4.0),
                (19.5, 4.0),
                (22.5, 4.0),
                (22.5, 4.0),
                (22.5, 4.0),
                (22.5, 4.0),
            ]
        );
    }

    #[test]
    fn test_ids_are_dense_across_cabinets() {
        let cabs = vec![
            Cabinet::new("wall", 24.0, 30.0, 12.0),
            Cabinet::new("base", 18.0, 34.5, 24.0),
        ];
        let requests = create_cut_requests(&cabs).unwrap();

        assert_eq!(requests.len(), 17);
        for (idx, request) in requests.iter().enumerate() {
            assert_eq!(request.id, idx);
        }
        assert_eq!(requests[0].source_ref, "wall-24-30-12");
        assert_eq!(requests[6].source_ref, "base-18-34.5-24");
    }

    #[test]
    fn test_unknown_kind_is_not_silently_skipped() {
        let cabs = vec![
            Cabinet::new("wall", 24.0, 30.0, 12.0),
            Cabinet::new("corner", 36.0, 34.5, 24.0),
        ];
        let err = create_cut_requests(&cabs).unwrap_err();
        assert!(matches!(err, PlanError::UnknownCabinetKind { ref kind } if kind == "corner"));
    }
}
