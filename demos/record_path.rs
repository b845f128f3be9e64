// MIT/Apache2 License

use easel::{
    geometry::{point, vector, Circle, Matrix2d, Rectangle},
    Color, LineJoin, PathBuilder, RecordingEngine, Result, Surface,
};
use std::f64::consts::PI;

fn main() -> Result {
    env_logger::init();

    let mut surface = Surface::new(RecordingEngine::new(640, 480))?;

    // a rotated square with a circle cut into one corner
    let path = PathBuilder::new()
        .change_origin(point(320.0, 240.0))
        .change_matrix(Matrix2d::rotation(PI / 6.0))
        .rectangle(Rectangle::new(220.0, 140.0, 200.0, 200.0))
        .circle(Circle::new(point(220.0, 140.0), 40.0))
        .change_matrix(Matrix2d::identity())
        .move_to(point(20.0, 20.0))
        .rel_line_to(vector(100.0, 0.0))
        .arc_negative(point(120.0, 70.0), 50.0, -PI / 2.0, -PI)
        .build();

    surface.set_path(&path)?;
    surface.set_brush(&Color::rgb(0.2, 0.4, 0.8).unwrap_or_else(Color::black).into())?;
    surface.fill()?;

    surface.set_line_join(LineJoin::MiterOrBevel)?;
    surface.set_miter_limit(4.0)?;
    surface.set_line_width(3.0)?;
    surface.stroke()?;

    println!("fill extents: {:?}", surface.fill_extents()?);
    println!("stroke extents: {:?}", surface.stroke_extents()?);

    for command in surface.engine().commands() {
        println!("{:?}", command);
    }

    Ok(())
}
