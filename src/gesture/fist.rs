//! Closed-fist classification
//!
//! Screen-space y grows downward, so a curled finger puts its tip
//! below (numerically greater y than) its middle joint. The thumb is
//! not evaluated; it stays to the side of a fist and its tip position
//! is too noisy to help.

use super::landmarks::{HandObservation, FINGER_JOINTS};

/// True iff all four non-thumb fingertips sit below their PIP joints.
pub fn is_fist(hand: &HandObservation) -> bool {
    FINGER_JOINTS
        .iter()
        .all(|&(tip, pip)| hand.landmark(tip).y > hand.landmark(pip).y)
}

#[cfg(test)]
mod tests {
    use super::super::landmarks::{FINGER_JOINTS, THUMB_TIP};
    use super::*;

    #[test]
    fn test_all_fingers_curled_is_fist() {
        assert!(is_fist(&HandObservation::fist()));
    }

    #[test]
    fn test_open_hand_is_not_fist() {
        // Tips above their joints
        let mut hand = HandObservation::open();
        for (tip, pip) in FINGER_JOINTS {
            hand = hand.with_landmark(pip, 0.5, 0.5).with_landmark(tip, 0.5, 0.3);
        }
        assert!(!is_fist(&hand));
    }

    #[test]
    fn test_one_extended_finger_breaks_the_fist() {
        for (tip, _) in FINGER_JOINTS {
            let hand = HandObservation::fist().with_landmark(tip, 0.5, 0.2);
            assert!(!is_fist(&hand), "finger tip {} extended", tip);
        }
    }

    #[test]
    fn test_thumb_does_not_participate() {
        let raised_thumb = HandObservation::fist().with_landmark(THUMB_TIP, 0.5, 0.0);
        assert!(is_fist(&raised_thumb));
    }

    #[test]
    fn test_tip_level_with_joint_is_not_curled() {
        let mut hand = HandObservation::open();
        for (tip, pip) in FINGER_JOINTS {
            hand = hand.with_landmark(pip, 0.5, 0.5).with_landmark(tip, 0.5, 0.5);
        }
        assert!(!is_fist(&hand));
    }
}
