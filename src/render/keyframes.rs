//! The three motion keyframes a layer can bind to.

use crate::model::AnimationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframes {
    pub animation: AnimationType,
    /// `(percent, transform)` pairs in timeline order.
    pub steps: [(u8, &'static str); 3],
}

pub const MOVE_IN_CIRCLE: Keyframes = Keyframes {
    animation: AnimationType::MoveInCircle,
    steps: [
        (0, "rotate(0deg)"),
        (50, "rotate(180deg)"),
        (100, "rotate(360deg)"),
    ],
};

pub const MOVE_VERTICAL: Keyframes = Keyframes {
    animation: AnimationType::MoveVertical,
    steps: [
        (0, "translateY(-50%)"),
        (50, "translateY(50%)"),
        (100, "translateY(-50%)"),
    ],
};

pub const MOVE_HORIZONTAL: Keyframes = Keyframes {
    animation: AnimationType::MoveHorizontal,
    steps: [
        (0, "translateX(-10%)"),
        (50, "translateX(10%)"),
        (100, "translateX(-10%)"),
    ],
};

pub const PREDEFINED: [Keyframes; 3] = [MOVE_IN_CIRCLE, MOVE_VERTICAL, MOVE_HORIZONTAL];

impl Keyframes {
    pub fn css(&self) -> String {
        let steps = self
            .steps
            .iter()
            .map(|(percent, transform)| format!("  {percent}% {{ transform: {transform}; }}\n"))
            .collect::<String>();
        format!("@keyframes {} {{\n{steps}}}", self.animation.as_str())
    }
}

/// All predefined keyframe blocks, separated by blank lines.
pub fn stylesheet() -> String {
    PREDEFINED
        .iter()
        .map(Keyframes::css)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_keyframes_rotate_full_turn() {
        assert_eq!(
            MOVE_IN_CIRCLE.css(),
            "@keyframes moveInCircle {\n  0% { transform: rotate(0deg); }\n  50% { transform: rotate(180deg); }\n  100% { transform: rotate(360deg); }\n}"
        );
    }

    #[test]
    fn every_moving_animation_type_has_keyframes() {
        for animation in AnimationType::ALL {
            let defined = PREDEFINED.iter().any(|frames| frames.animation == animation);
            assert_eq!(defined, animation.keyframes_name().is_some(), "{animation}");
        }
    }

    #[test]
    fn stylesheet_contains_all_three_blocks_in_order() {
        let css = stylesheet();
        let circle = css.find("@keyframes moveInCircle").expect("circle block");
        let vertical = css.find("@keyframes moveVertical").expect("vertical block");
        let horizontal = css.find("@keyframes moveHorizontal").expect("horizontal block");
        assert!(circle < vertical && vertical < horizontal);
        assert!(css.contains("translateY(-50%)"));
        assert!(css.contains("translateX(10%)"));
    }
}
