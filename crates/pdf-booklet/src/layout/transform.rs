//! Transformation matrices for placing a source page into a region

use crate::types::{Rect, Rotation};

/// Scale at which a `width` × `height` page, after `rotation`, fits inside
/// `region` with its aspect ratio preserved.
pub fn fit_scale(width: f32, height: f32, rotation: Rotation, region: &Rect) -> f32 {
    let (rotated_width, rotated_height) = if rotation.is_quarter_turn() {
        (height, width)
    } else {
        (width, height)
    };
    (region.width / rotated_width).min(region.height / rotated_height)
}

/// Matrix `[a b c d e f]` for the `cm` operator that draws `source` (the
/// page's bounding box) rotated clockwise by `rotation`, scaled to fit and
/// centred inside `region`.
pub fn placement_matrix(source: &Rect, rotation: Rotation, region: &Rect) -> [f32; 6] {
    let (w, h) = (source.width, source.height);

    // Rotation about the origin followed by the shift that brings the
    // rotated page back into the positive quadrant.
    let (a, b, c, d, e, f) = match rotation {
        Rotation::None => (1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
        Rotation::Clockwise90 => (0.0, -1.0, 1.0, 0.0, 0.0, w),
        Rotation::Clockwise180 => (-1.0, 0.0, 0.0, -1.0, w, h),
        Rotation::Clockwise270 => (0.0, 1.0, -1.0, 0.0, h, 0.0),
    };
    let (rotated_width, rotated_height) = if rotation.is_quarter_turn() {
        (h, w)
    } else {
        (w, h)
    };

    let scale = fit_scale(w, h, rotation, region);
    let offset_x = region.x + (region.width - rotated_width * scale) / 2.0;
    let offset_y = region.y + (region.height - rotated_height * scale) / 2.0;

    // Fold in the translation that moves the box's lower-left corner to 0,0
    let (x0, y0) = (source.x, source.y);
    [
        scale * a,
        scale * b,
        scale * c,
        scale * d,
        scale * (e - a * x0 - c * y0) + offset_x,
        scale * (f - b * x0 - d * y0) + offset_y,
    ]
}

/// Apply a `cm` matrix to a point
pub fn transform_point(m: &[f32; 6], x: f32, y: f32) -> (f32, f32) {
    (m[0] * x + m[2] * y + m[4], m[1] * x + m[3] * y + m[5])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_point(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_fit_scale_exact_half_of_a4() {
        // A5 page turned sideways fills half an A4 sheet
        let region = Rect::new(0.0, 0.0, 420.0, 297.5);
        let scale = fit_scale(297.5, 420.0, Rotation::Clockwise90, &region);
        assert!((scale - 1.0).abs() < EPS);
    }

    #[test]
    fn test_clockwise_90_corners() {
        let source = Rect::new(0.0, 0.0, 100.0, 200.0);
        let region = Rect::new(0.0, 50.0, 200.0, 100.0);
        let m = placement_matrix(&source, Rotation::Clockwise90, &region);

        // Top-left of the page lands top-right, bottom-left lands top-left
        assert_point(transform_point(&m, 0.0, 200.0), (200.0, 150.0));
        assert_point(transform_point(&m, 0.0, 0.0), (0.0, 150.0));
        assert_point(transform_point(&m, 100.0, 0.0), (0.0, 50.0));
    }

    #[test]
    fn test_clockwise_270_corners() {
        let source = Rect::new(0.0, 0.0, 100.0, 200.0);
        let region = Rect::new(0.0, 0.0, 200.0, 100.0);
        let m = placement_matrix(&source, Rotation::Clockwise270, &region);

        // Top-left of the page lands bottom-left, bottom-left lands bottom-right
        assert_point(transform_point(&m, 0.0, 200.0), (0.0, 0.0));
        assert_point(transform_point(&m, 0.0, 0.0), (200.0, 0.0));
        assert_point(transform_point(&m, 100.0, 200.0), (0.0, 100.0));
    }

    #[test]
    fn test_offset_media_box_and_centering() {
        // Box origin away from 0,0 and a region wider than the rotated page
        let source = Rect::new(10.0, 20.0, 100.0, 200.0);
        let region = Rect::new(0.0, 0.0, 300.0, 50.0);
        let m = placement_matrix(&source, Rotation::Clockwise90, &region);

        // Scale 0.5 by height; rotated page is 100 wide, centred at x 100..200
        assert_point(transform_point(&m, 10.0, 20.0), (100.0, 50.0));
        assert_point(transform_point(&m, 110.0, 220.0), (200.0, 0.0));
    }

    #[test]
    fn test_identity_without_rotation() {
        let source = Rect::new(0.0, 0.0, 100.0, 100.0);
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let m = placement_matrix(&source, Rotation::None, &region);
        assert_eq!(m, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }
}
