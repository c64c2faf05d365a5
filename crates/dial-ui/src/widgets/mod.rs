pub mod chronometer;
pub mod clock_face;
