#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::pos_resource;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    /// Setup where all input files exist
    fn valid_setup() -> Config {
        Config::default()
            .with_config_file(&pos_resource("rtk.pos"))
            .with_rover_observations(&pos_resource("emlid.pos"))
            .with_base_observations(&pos_resource("rtk.pos"))
            .with_navigation(&pos_resource("headless.pos"))
    }

    fn unreachable_output() -> PathBuf {
        std::env::temp_dir()
            .join("rtkpos-unreachable")
            .join("solution.pos")
    }

    #[test]
    fn default_setup() {
        let cfg = Config::default();
        assert_eq!(cfg.executable_path, PathBuf::from("rnx2rtkp"));
        assert_eq!(cfg.config_file_path, PathBuf::from("rtklib.conf"));
        assert_eq!(cfg.output_path, PathBuf::from("solution.pos"));
    }

    #[test]
    fn command_line() {
        let cfg = Config::default()
            .with_executable(Path::new("/opt/RTKLIB/bin/rnx2rtkp"))
            .with_config_file(Path::new("rtklib.conf"))
            .with_rover_observations(Path::new("Rover.24O"))
            .with_base_observations(Path::new("Base.24o"))
            .with_navigation(Path::new("Nav.24n"))
            .with_output(Path::new("528rtk.pos"));

        let rnx2rtkp = Rnx2Rtkp::new(&cfg);
        assert_eq!(
            rnx2rtkp.args(),
            ["-o", "528rtk.pos", "-t", "-k", "rtklib.conf", "Rover.24O", "Base.24o", "Nav.24n"]
                .iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            rnx2rtkp.command_line(),
            "/opt/RTKLIB/bin/rnx2rtkp -o 528rtk.pos -t -k rtklib.conf Rover.24O Base.24o Nav.24n"
        );
    }

    #[test]
    fn paths_with_spaces_are_single_arguments() {
        let cfg = valid_setup().with_output(Path::new("my solutions/rover 1.pos"));
        let args = Rnx2Rtkp::new(&cfg).args();
        assert_eq!(args.len(), 8);
        assert_eq!(args[1], OsString::from("my solutions/rover 1.pos"));
    }

    #[test]
    fn missing_input() {
        let cfg = valid_setup().with_navigation(Path::new("does_not_exist.24n"));
        match Rnx2Rtkp::new(&cfg).run() {
            Err(ProcessError::MissingInput(path)) => {
                assert_eq!(path, PathBuf::from("does_not_exist.24n"))
            },
            other => panic!("expecting missing input, got {:?}", other),
        }
    }

    #[test]
    fn missing_executable() {
        let cfg = valid_setup().with_executable(Path::new("/does/not/exist/rnx2rtkp"));
        match Rnx2Rtkp::new(&cfg).run() {
            Err(ProcessError::Spawn { path, .. }) => {
                assert_eq!(path, PathBuf::from("/does/not/exist/rnx2rtkp"))
            },
            other => panic!("expecting spawn error, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn exit_status_is_reported() {
        let cfg = valid_setup()
            .with_executable(Path::new("false"))
            .with_output(&unreachable_output());
        match Rnx2Rtkp::new(&cfg).run() {
            Err(ProcessError::ExitStatus { status, .. }) => assert!(!status.success()),
            other => panic!("expecting exit status error, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn missing_output() {
        let cfg = valid_setup()
            .with_executable(Path::new("true"))
            .with_output(&unreachable_output());
        match Rnx2Rtkp::new(&cfg).run() {
            Err(ProcessError::MissingOutput(path)) => assert_eq!(path, unreachable_output()),
            other => panic!("expecting missing output, got {:?}", other),
        }
    }

    /// Dedicated temporary directory
    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Solver that simply copies the rover file (6th argument)
    /// to the output file (2nd argument)
    #[cfg(unix)]
    fn copying_solver(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("rnx2rtkp.sh");
        std::fs::write(&path, "#!/bin/sh\ncp \"$6\" \"$2\"\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn previous_output_is_discarded() {
        let output = temp_dir("rtkpos-previous-output").join("solution.pos");
        std::fs::copy(pos_resource("emlid.pos"), &output).unwrap();

        let cfg = valid_setup()
            .with_executable(Path::new("true"))
            .with_output(&output);
        match Rnx2Rtkp::new(&cfg).run() {
            Err(ProcessError::MissingOutput(path)) => assert_eq!(path, output),
            other => panic!("expecting missing output, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    #[cfg(unix)]
    fn solve_then_compare() {
        let dir = temp_dir("rtkpos-solve-then-compare");
        let cfg = valid_setup()
            .with_executable(&copying_solver(&dir))
            .with_output(&dir.join("528emlid.pos"));

        let comparison =
            Comparison::from_config(&cfg, &pos_resource("rtk.pos"), DuplicatePolicy::default())
                .unwrap();
        assert_eq!(comparison.alignment.len(), 4);

        let cfg = cfg.with_executable(Path::new("false"));
        let comparison =
            Comparison::from_config(&cfg, &pos_resource("rtk.pos"), DuplicatePolicy::default());
        assert!(matches!(
            comparison,
            Err(Error::Process(ProcessError::ExitStatus { .. }))
        ));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn json_setup() {
        let cfg: Config = serde_json::from_str(
            r#"{
                "rover_obs_path": "data/528/Rover.24O",
                "base_obs_path": "data/528/Base.24o",
                "nav_path": "data/528/Nav.24n",
                "output_path": "data/528/528rtk.pos"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.executable_path, PathBuf::from("rnx2rtkp"));
        assert_eq!(cfg.config_file_path, PathBuf::from("rtklib.conf"));
        assert_eq!(cfg.rover_obs_path, PathBuf::from("data/528/Rover.24O"));
        assert_eq!(cfg.output_path, PathBuf::from("data/528/528rtk.pos"));
    }
}
