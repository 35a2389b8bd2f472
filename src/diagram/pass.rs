//! Per-relationship bounds used by the forward and backward passes.
//!
//! Each function returns the bound one edge imposes; the caller folds bounds
//! with `max` (forward) or `min` (backward). Arithmetic is checked: a bound
//! that does not fit in `i64` is `None`. With `d = lag − lead`:
//!
//! | Kind | Forward: successor ES ≥ | Backward: predecessor LF ≤ |
//! |------|-------------------------|----------------------------|
//! | FS | `pred.EF + d` | `succ.LS − d` |
//! | SS | `pred.ES + d` | `succ.LS + pred.dur − d` |
//! | FF | `pred.EF − succ.dur + d` | `succ.LS + succ.dur − d` |
//! | SF | `pred.ES − succ.dur + d` | `succ.LS + pred.dur + succ.dur − d` |

use crate::models::{ActivityNode, RelationshipKind, RelationshipType};

/// Lower bound on the successor's early start, `None` on overflow.
pub(crate) fn early_start_bound(
    relationship: RelationshipType,
    predecessor: &ActivityNode,
    successor_duration: i64,
) -> Option<i64> {
    let d = relationship.offset();
    match relationship.kind {
        RelationshipKind::FinishToStart => predecessor.early_finish().checked_add(d),
        RelationshipKind::StartToStart => predecessor.early_start().checked_add(d),
        RelationshipKind::FinishToFinish => predecessor
            .early_finish()
            .checked_sub(successor_duration)?
            .checked_add(d),
        RelationshipKind::StartToFinish => predecessor
            .early_start()
            .checked_sub(successor_duration)?
            .checked_add(d),
    }
}

/// Upper bound on the predecessor's late finish, `None` on overflow.
pub(crate) fn late_finish_bound(
    relationship: RelationshipType,
    predecessor_duration: i64,
    successor: &ActivityNode,
) -> Option<i64> {
    let d = relationship.offset();
    let late_start = successor.late_start();
    match relationship.kind {
        RelationshipKind::FinishToStart => late_start.checked_sub(d),
        RelationshipKind::StartToStart => late_start
            .checked_add(predecessor_duration)?
            .checked_sub(d),
        RelationshipKind::FinishToFinish => late_start
            .checked_add(successor.duration())?
            .checked_sub(d),
        RelationshipKind::StartToFinish => late_start
            .checked_add(predecessor_duration)?
            .checked_add(successor.duration())?
            .checked_sub(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn node(duration: i64, early_start: i64, late_finish: i64) -> ActivityNode {
        let mut n = ActivityNode::new(Activity::new("N", duration).unwrap());
        n.set_early_start(early_start);
        n.set_late_finish(late_finish);
        n
    }

    #[test]
    fn test_forward_bounds() {
        // ES 10, EF 17
        let pred = node(7, 10, 17);
        let fs = RelationshipType::finish_to_start();
        let ss = RelationshipType::start_to_start();
        let ff = RelationshipType::finish_to_finish();
        let sf = RelationshipType::start_to_finish();

        assert_eq!(early_start_bound(fs, &pred, 1), Some(17));
        assert_eq!(early_start_bound(ss, &pred, 1), Some(10));
        assert_eq!(early_start_bound(ff, &pred, 4), Some(13));
        assert_eq!(early_start_bound(sf, &pred, 1), Some(9));
    }

    #[test]
    fn test_forward_bounds_apply_offset() {
        let pred = node(5, 0, 5);
        let lag = RelationshipType::finish_to_start().with_lag(1);
        let lead = RelationshipType::start_to_start().with_lead(2);

        assert_eq!(early_start_bound(lag, &pred, 6), Some(6));
        assert_eq!(early_start_bound(lead, &pred, 6), Some(-2));
    }

    #[test]
    fn test_backward_bounds() {
        // LS 9, LF 10
        let succ = node(1, 9, 10);
        let fs = RelationshipType::finish_to_start();
        let ss = RelationshipType::start_to_start();
        let ff = RelationshipType::finish_to_finish();
        let sf = RelationshipType::start_to_finish();

        assert_eq!(late_finish_bound(fs, 7, &succ), Some(9));
        assert_eq!(late_finish_bound(ss, 7, &succ), Some(16));
        assert_eq!(late_finish_bound(ff, 7, &succ), Some(10));
        assert_eq!(late_finish_bound(sf, 7, &succ), Some(17));
    }

    #[test]
    fn test_backward_bounds_apply_offset() {
        let succ = node(3, 7, 11);
        let sf_lag = RelationshipType::start_to_finish().with_lag(1);
        let ff_lead = RelationshipType::finish_to_finish().with_lead(1);

        // LS 8
        assert_eq!(late_finish_bound(sf_lag, 3, &succ), Some(8 + 3 + 3 - 1));
        assert_eq!(late_finish_bound(ff_lead, 6, &succ), Some(8 + 3 + 1));
    }

    #[test]
    fn test_bounds_are_inverse() {
        // A tight forward bound maps back to zero float under the matching
        // backward bound, for every kind.
        let pred = node(4, 3, 7);
        for kind in RelationshipKind::ALL {
            let rt = RelationshipType::new(kind).with_lag(2).with_lead(1);
            let succ_duration = 5;
            let es = early_start_bound(rt, &pred, succ_duration).unwrap();
            let succ = node(succ_duration, es, es + succ_duration);
            assert_eq!(
                late_finish_bound(rt, pred.duration(), &succ),
                Some(pred.early_finish())
            );
        }
    }

    #[test]
    fn test_overflow_is_none() {
        let pred = node(i64::MAX, 0, i64::MAX);
        let lag = RelationshipType::finish_to_start().with_lag(1);
        assert_eq!(early_start_bound(lag, &pred, 0), None);

        let succ = node(i64::MAX, 0, i64::MAX);
        let sf = RelationshipType::start_to_finish();
        assert_eq!(late_finish_bound(sf, 1, &succ), None);
    }
}
