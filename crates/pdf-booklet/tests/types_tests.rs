use pdf_booklet::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_paper_size_orientation() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
}

#[test]
fn test_rotation_degrees() {
    assert_eq!(Rotation::None.degrees(), 0);
    assert_eq!(Rotation::Clockwise90.degrees(), 90);
    assert_eq!(Rotation::Clockwise180.degrees(), 180);
    assert_eq!(Rotation::Clockwise270.degrees(), 270);
    assert!(Rotation::Clockwise90.is_quarter_turn());
    assert!(!Rotation::Clockwise180.is_quarter_turn());
}

#[test]
fn test_rotation_from_page_rotate_values() {
    assert_eq!(Rotation::from_degrees(0), Rotation::None);
    assert_eq!(Rotation::from_degrees(90), Rotation::Clockwise90);
    assert_eq!(Rotation::from_degrees(-90), Rotation::Clockwise270);
    assert_eq!(Rotation::from_degrees(540), Rotation::Clockwise180);
    assert_eq!(Rotation::from_degrees(45), Rotation::None);
}

#[test]
fn test_rotation_composition() {
    assert_eq!(
        Rotation::Clockwise90.then(Rotation::Clockwise90),
        Rotation::Clockwise180
    );
    assert_eq!(Rotation::Clockwise90.then(Rotation::Clockwise270), Rotation::None);
    assert_eq!(Rotation::None.then(Rotation::Clockwise270), Rotation::Clockwise270);
}

#[test]
fn test_rect_intersection() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        a.intersection(&Rect::new(50.0, -20.0, 100.0, 70.0)),
        Some(Rect::new(50.0, 0.0, 50.0, 50.0))
    );
    assert_eq!(a.intersection(&Rect::new(100.0, 0.0, 10.0, 10.0)), None);
}

#[test]
fn test_sheet_side_rotation() {
    assert_eq!(SheetSide::Front.rotation(), Rotation::Clockwise90);
    assert_eq!(SheetSide::Back.rotation(), Rotation::Clockwise270);
}

#[test]
fn test_mm_to_pt() {
    assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
}
