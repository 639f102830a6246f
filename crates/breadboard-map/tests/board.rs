use approx::assert_relative_eq;
use breadboard_map::{
    are_connected, BoardCalibration, BoardLayout, BreadboardPosition, Column, CornerUpdate,
    Detection, LegMapper, LegMapperParams, PositionResolver, ResolverParams, SharedMapper,
};
use nalgebra::Point2;

fn default_resolver() -> PositionResolver {
    let calibration = BoardCalibration::new(BoardLayout::default()).expect("calibration");
    PositionResolver::new(calibration, ResolverParams::default())
}

fn detection(label: &str, x: f32, y: f32, width: f32, height: f32) -> Detection {
    Detection {
        x,
        y,
        width,
        height,
        label: label.to_string(),
    }
}

#[test]
fn reference_calibration_resolves_the_board_corners() {
    let resolver = default_resolver();

    let cases = [
        ((195.0, 95.0), "a1"),
        ((390.0, 95.0), "e1"),
        ((455.0, 95.0), "f1"),
        ((650.0, 95.0), "j1"),
        ((195.0, 870.0), "a30"),
        ((650.0, 870.0), "j30"),
        ((115.0, 300.0), "+L9"),
        ((740.0, 300.0), "-R9"),
        ((300.0, 500.0), "c16"),
    ];
    for ((x, y), expected) in cases {
        let pos = resolver.resolve(Point2::new(x, y));
        assert_eq!(pos.label().as_deref(), Some(expected), "pixel ({x}, {y})");
    }
}

#[test]
fn every_in_band_row_is_within_board_range() {
    let resolver = default_resolver();
    let spacing = resolver.calibration().spacing().row;

    let mut y = 95.0 - spacing / 2.0;
    while y <= 870.0 + spacing / 2.0 {
        let pos = resolver.resolve(Point2::new(195.0, y));
        let row = pos.row.expect("row inside the band");
        assert!((1..=30).contains(&row), "row {row} at y={y}");
        y += spacing / 4.0;
    }

    assert_eq!(
        resolver.resolve(Point2::new(195.0, 95.0 - spacing)),
        BreadboardPosition::INVALID
    );
}

#[test]
fn row_half_connectivity_across_the_board() {
    for row in 1..=30u8 {
        let a = BreadboardPosition::new(row, Column::A);
        let e = BreadboardPosition::new(row, Column::E);
        let f = BreadboardPosition::new(row, Column::F);
        assert!(are_connected(&a, &e));
        assert!(!are_connected(&e, &f));
        assert_eq!(are_connected(&a, &e), are_connected(&e, &a));
    }
}

#[test]
fn a_component_bridging_the_channel_reads_as_two_nets() {
    let calibration = BoardCalibration::new(BoardLayout::default()).expect("calibration");
    let mapper = LegMapper::new(
        PositionResolver::new(calibration, ResolverParams::default()),
        LegMapperParams::default(),
    );

    let mapped = mapper.map(&detection("resistor", 422.5, 500.0, 75.0, 20.0));
    let leg2 = mapped.leg2.expect("two legs");
    assert_eq!(mapped.leg1, BreadboardPosition::new(16, Column::E));
    assert_eq!(leg2, BreadboardPosition::new(16, Column::F));
    assert!(mapped.spans_gap);
    assert!(!are_connected(&mapped.leg1, &leg2));
}

#[test]
fn recalibration_refreshes_spacing_for_subsequent_resolutions() {
    let shared = SharedMapper::with_defaults().expect("mapper");
    let old_spacing = shared.snapshot().resolver().calibration().spacing();

    shared
        .recalibrate(&CornerUpdate {
            a1: Some([100.0, 50.0]),
            e1: Some([300.0, 50.0]),
            a30: Some([100.0, 900.0]),
            ..CornerUpdate::default()
        })
        .expect("recalibrate");

    assert_eq!(
        shared.resolve(Point2::new(100.0, 50.0)),
        BreadboardPosition::new(1, Column::A)
    );

    let new_spacing = shared.snapshot().resolver().calibration().spacing();
    assert!((new_spacing.row - old_spacing.row).abs() > 1.0, "stale row spacing");
    assert_relative_eq!(new_spacing.row, 850.0 / 29.0, epsilon = 1e-4);
    assert_relative_eq!(new_spacing.col_left, 50.0, epsilon = 1e-4);
}

#[test]
fn corner_updates_arrive_as_json_from_the_operator_ui() {
    let shared = SharedMapper::with_defaults().expect("mapper");
    let update: CornerUpdate = serde_json::from_str(
        r#"{"a1": [100.0, 50.0], "e1": [300.0, 50.0], "a30": [100.0, 900.0]}"#,
    )
    .expect("corner json");
    shared.recalibrate(&update).expect("recalibrate");
    assert_eq!(
        shared.resolve(Point2::new(300.0, 50.0)),
        BreadboardPosition::new(1, Column::E)
    );
}

#[test]
fn a_frame_of_detections_maps_against_one_snapshot() {
    let shared = SharedMapper::with_defaults().expect("mapper");
    let frame = vec![
        detection("button", 195.0, 95.0, 30.0, 30.0),
        detection("led", 195.0, 121.72, 20.0, 63.45),
        detection("resistor", 422.5, 500.0, 75.0, 20.0),
    ];

    let mapped = shared.map_all(&frame);
    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped[0].leg1.label().as_deref(), Some("a1"));
    assert_eq!(mapped[1].leg2.expect("led leg").label().as_deref(), Some("a3"));
    assert!(mapped[2].spans_gap);
}
