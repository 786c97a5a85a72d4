use crate::shared::point::Point;
use crate::shared::region::Region;

/// Eye centers for a face rectangle.
///
/// Exactly two detection results yield their rectangle centers; anything
/// else falls back to fixed fractional positions inside the face: one-third
/// and two-thirds of the width, at one-third of the height. Integer
/// division, matching the detector's pixel grid.
pub fn eye_centers(face: &Region, eyes: &[Region]) -> [Point; 2] {
    if let [left, right] = eyes {
        [left.center(), right.center()]
    } else {
        [
            Point::new(face.x + face.width / 3, face.y + face.height / 3),
            Point::new(face.x + 2 * face.width / 3, face.y + face.height / 3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn face() -> Region {
        Region::new(100, 50, 90, 120)
    }

    #[test]
    fn test_two_eyes_use_rectangle_centers() {
        let eyes = [Region::new(110, 80, 20, 20), Region::new(160, 82, 22, 18)];
        let centers = eye_centers(&face(), &eyes);
        assert_eq!(centers[0], Point::new(120, 90));
        assert_eq!(centers[1], Point::new(171, 91));
    }

    #[rstest]
    #[case::none(0)]
    #[case::one(1)]
    #[case::three(3)]
    fn test_other_counts_fall_back_to_thirds(#[case] count: usize) {
        let eyes = vec![Region::new(110, 80, 20, 20); count];
        let centers = eye_centers(&face(), &eyes);
        assert_eq!(centers[0], Point::new(100 + 90 / 3, 50 + 120 / 3));
        assert_eq!(centers[1], Point::new(100 + 2 * 90 / 3, 50 + 120 / 3));
    }

    #[test]
    fn test_fallback_uses_integer_division() {
        // Width 91 is not divisible by 3; the fallback truncates
        let face = Region::new(0, 0, 91, 91);
        let centers = eye_centers(&face, &[]);
        assert_eq!(centers[0], Point::new(30, 30));
        assert_eq!(centers[1], Point::new(60, 30));
    }
}
