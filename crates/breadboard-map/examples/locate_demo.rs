//! Resolve a handful of sample pixel coordinates and map one detection
//! against the reference camera calibration.
//!
//! Run with `cargo run --example locate_demo`.

use breadboard_map::{
    are_connected, init_with_level, Detection, SharedMapper,
};
use log::{info, LevelFilter};
use nalgebra::Point2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let mapper = SharedMapper::with_defaults()?;

    let sample_points = [
        (195.0, 95.0, "first left-grid hole"),
        (390.0, 95.0, "last left-grid column, row 1"),
        (455.0, 95.0, "first right-grid column, row 1"),
        (650.0, 95.0, "last right-grid hole, row 1"),
        (300.0, 500.0, "mid-board left section"),
        (115.0, 300.0, "left positive rail"),
        (740.0, 300.0, "right negative rail"),
        (900.0, 500.0, "off the board"),
    ];

    for (x, y, what) in sample_points {
        let pos = mapper.resolve(Point2::new(x, y));
        match pos.label() {
            Some(label) => info!("({x:5.0}, {y:5.0}) -> {label:<5} ({what})"),
            None => info!("({x:5.0}, {y:5.0}) -> unresolved ({what})"),
        }
    }

    let resistor = Detection {
        x: 422.5,
        y: 500.0,
        width: 75.0,
        height: 20.0,
        label: "resistor".to_string(),
    };
    let mapped = mapper.map(&resistor);
    let leg2 = mapped.leg2.expect("a resistor has two legs");
    info!(
        "{}: leg1={} leg2={} spans_gap={} connected={}",
        mapped.label,
        mapped.leg1,
        leg2,
        mapped.spans_gap,
        are_connected(&mapped.leg1, &leg2)
    );

    Ok(())
}
