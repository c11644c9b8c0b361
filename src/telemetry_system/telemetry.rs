use std::fmt;
use std::io::{self, Write};

use crate::constants::{OUTPUT_EXTENSION, STATE_PRECISION, TIME_PRECISION};
use crate::control::parameters::LaunchParameters;
use crate::control::simulation::{StateRecord, StopReason};

/// Output file name for a run, e.g. `v0_100_ang_45.dat`.
pub fn output_file_name(params: &LaunchParameters) -> String {
    format!(
        "v0_{}_ang_{}.{}",
        params.initial_velocity, params.launch_angle, OUTPUT_EXTENSION
    )
}

/// Writes the flat per-run text stream: one header line, then one block per
/// record.
pub struct TrajectoryWriter<W: Write> {
    out: W,
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(out: W) -> Self {
        TrajectoryWriter { out }
    }

    /// The angle is written in radians.
    pub fn write_header(&mut self, params: &LaunchParameters) -> io::Result<()> {
        writeln!(
            self.out,
            "InitAlt = {}\tInitVel = {}\ttheta = {}",
            params.initial_altitude,
            params.initial_velocity,
            params.launch_angle_radians()
        )
    }

    pub fn write_record(&mut self, record: &StateRecord) -> io::Result<()> {
        let p = STATE_PRECISION;
        writeln!(self.out, "{:.*}", TIME_PRECISION, record.time)?;
        writeln!(
            self.out,
            "\ty={:.p$} y'={:.p$} y''={:.p$}",
            record.position.y, record.velocity.y, record.acceleration.y
        )?;
        writeln!(
            self.out,
            "\tx={:.p$} x'={:.p$} x''={:.p$}",
            record.position.x, record.velocity.x, record.acceleration.x
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Running summary of the emitted records.
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    records: usize,
    max_altitude: f64,
    max_speed: f64,
    last_time: f64,
    ground_distance: f64,
    stop_reason: Option<StopReason>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::default()
    }

    pub fn collect_data(&mut self, record: &StateRecord) {
        if self.records == 0 || record.position.y > self.max_altitude {
            self.max_altitude = record.position.y;
        }
        self.max_speed = self.max_speed.max(record.velocity.magnitude());
        self.last_time = record.time;
        self.ground_distance = record.position.x;
        self.records += 1;
    }

    pub fn finish(&mut self, reason: Option<StopReason>) {
        self.stop_reason = reason;
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Time of the last emitted record.
    pub fn flight_time(&self) -> f64 {
        self.last_time
    }

    /// Downrange distance of the last emitted record.
    pub fn ground_distance(&self) -> f64 {
        self.ground_distance
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    fn format_distance(meters: f64) -> String {
        if meters.abs() >= 1000.0 {
            format!("{:.2} km", meters / 1000.0)
        } else {
            format!("{:.2} m", meters)
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Flight Summary ---")?;
        writeln!(f, "Records: {}", self.records)?;
        if self.records > 0 {
            writeln!(f, "Flight Time: {:.6} s", self.last_time)?;
            writeln!(f, "Max Altitude: {}", Self::format_distance(self.max_altitude))?;
            writeln!(f, "Range: {}", Self::format_distance(self.ground_distance))?;
            writeln!(f, "Max Speed: {:.2} m/s", self.max_speed)?;
        }
        match self.stop_reason {
            Some(StopReason::GroundImpact) => write!(f, "Ended: ground impact"),
            Some(StopReason::DurationElapsed) => write!(f, "Ended: duration elapsed"),
            None => write!(f, "Ended: in progress"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::vector2d::Vector2D;

    fn params() -> LaunchParameters {
        LaunchParameters {
            initial_altitude: 0.0,
            initial_velocity: 100.0,
            launch_angle: 45.0,
            time_step: 0.01,
            duration: 20.0,
        }
    }

    fn record(time: f64, x: f64, y: f64) -> StateRecord {
        StateRecord {
            time,
            position: Vector2D::new(x, y),
            velocity: Vector2D::new(3.0, 4.0),
            acceleration: Vector2D::new(0.0, -9.80665),
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(&params()), "v0_100_ang_45.dat");

        let mut fractional = params();
        fractional.initial_velocity = 12.5;
        fractional.launch_angle = 30.25;
        assert_eq!(output_file_name(&fractional), "v0_12.5_ang_30.25.dat");
    }

    #[test]
    fn test_header_reports_angle_in_radians() {
        let mut writer = TrajectoryWriter::new(Vec::new());
        writer.write_header(&params()).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            format!(
                "InitAlt = 0\tInitVel = 100\ttheta = {}\n",
                45f64.to_radians()
            )
        );
    }

    #[test]
    fn test_record_layout() {
        let mut writer = TrajectoryWriter::new(Vec::new());
        writer.write_record(&record(0.01, 0.7071, 0.7022)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            "0.010000\n\
             \ty=0.702200000 y'=4.000000000 y''=-9.806650000\n\
             \tx=0.707100000 x'=3.000000000 x''=0.000000000\n"
        );
    }

    #[test]
    fn test_summary_tracks_extremes() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&record(1.0, 10.0, 5.0));
        telemetry.collect_data(&record(2.0, 20.0, 8.0));
        telemetry.collect_data(&record(3.0, 30.0, 2.0));
        telemetry.finish(Some(StopReason::GroundImpact));

        assert_eq!(telemetry.records(), 3);
        assert_eq!(telemetry.max_altitude(), 8.0);
        assert_eq!(telemetry.max_speed(), 5.0);
        assert_eq!(telemetry.flight_time(), 3.0);
        assert_eq!(telemetry.ground_distance(), 30.0);

        let summary = telemetry.to_string();
        assert!(summary.contains("Max Altitude: 8.00 m"));
        assert!(summary.contains("Ended: ground impact"));
    }

    #[test]
    fn test_summary_formats_kilometres() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&record(1.0, 0.0, 1_500.0));
        assert!(telemetry.to_string().contains("Max Altitude: 1.50 km"));
    }

    #[test]
    fn test_summary_without_records_omits_extremes() {
        let mut telemetry = Telemetry::new();
        telemetry.finish(Some(StopReason::GroundImpact));
        let summary = telemetry.to_string();

        assert!(summary.contains("Records: 0"));
        assert!(!summary.contains("Max Altitude"));
        assert!(!summary.contains("Range"));
        assert!(!summary.contains("Flight Time"));
        assert!(summary.ends_with("Ended: ground impact"));
    }
}
