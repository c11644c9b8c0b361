use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::{output_file_name, Telemetry, TrajectoryWriter};
use crate::trajectory_system::kinematics::Integrator;

use super::parameters::LaunchParameters;
use super::simulation::Trajectory;

/// Result of a run written to disk.
#[derive(Debug)]
pub struct RunReport {
    pub path: PathBuf,
    pub telemetry: Telemetry,
}

/// Integrates `params` and streams every record to `out`. `target` names the
/// destination in errors.
pub fn run_to_writer<W: Write>(
    params: &LaunchParameters,
    integrator: Integrator,
    out: W,
    target: &Path,
) -> Result<Telemetry, SimulationError> {
    params.validate()?;
    debug!(?params, "starting trajectory");

    let mut writer = TrajectoryWriter::new(out);
    let mut telemetry = Telemetry::new();
    let io_err = |e| SimulationError::write_failed(target, e);

    writer.write_header(params).map_err(io_err)?;

    let mut trajectory = Trajectory::new(integrator, params)?;
    for record in trajectory.by_ref() {
        writer.write_record(&record).map_err(io_err)?;
        telemetry.collect_data(&record);
    }
    writer.flush().map_err(io_err)?;
    telemetry.finish(trajectory.stop_reason());

    Ok(telemetry)
}

/// Runs `params` into `v0_<velocity>_ang_<angle>.dat` under `output_dir`.
pub fn run_to_file(
    params: &LaunchParameters,
    integrator: Integrator,
    output_dir: &Path,
) -> Result<RunReport, SimulationError> {
    params.validate()?;

    let path = output_dir.join(output_file_name(params));
    let file = File::create(&path).map_err(|e| SimulationError::create_failed(&path, e))?;
    info!(path = %path.display(), "writing trajectory");

    let telemetry = run_to_writer(params, integrator, BufWriter::new(file), &path)?;
    info!(
        records = telemetry.records(),
        flight_time = telemetry.flight_time(),
        "simulation complete"
    );

    Ok(RunReport { path, telemetry })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::simulation::StopReason;
    use crate::errors::OutputStage;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn params() -> LaunchParameters {
        LaunchParameters {
            initial_altitude: 100.0,
            initial_velocity: 0.0,
            launch_angle: 0.0,
            time_step: 0.5,
            duration: 1.0,
        }
    }

    #[test]
    fn test_run_to_writer_output() {
        let mut out = Vec::new();
        let telemetry =
            run_to_writer(&params(), Integrator::default(), &mut out, Path::new("mem")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(telemetry.records(), 2);
        assert_eq!(telemetry.stop_reason(), Some(StopReason::DurationElapsed));
        assert!(text.starts_with("InitAlt = 100\tInitVel = 0\ttheta = 0\n"));
        assert!(text.contains("0.500000\n"));
        assert!(text.contains("1.000000\n"));
        assert_eq!(text.lines().count(), 1 + 2 * 3);
    }

    #[test]
    fn test_invalid_parameters_rejected_before_writing() {
        let mut bad = params();
        bad.time_step = 0.0;
        let mut out = Vec::new();

        let result = run_to_writer(&bad, Integrator::default(), &mut out, Path::new("mem"));

        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_is_output_unavailable() {
        let result = run_to_writer(
            &params(),
            Integrator::default(),
            FailingWriter,
            Path::new("broken.dat"),
        );

        match result {
            Err(SimulationError::OutputUnavailable { path, stage, .. }) => {
                assert_eq!(path, PathBuf::from("broken.dat"));
                assert_eq!(stage, OutputStage::Write);
            }
            other => panic!("expected OutputUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory_is_output_unavailable() {
        let dir = std::env::temp_dir().join("projectile_sim_missing_dir/nested");
        let result = run_to_file(&params(), Integrator::default(), &dir);
        let err = result.unwrap_err();
        assert!(err.is_create_failure(), "unexpected error: {:?}", err);
    }
}
