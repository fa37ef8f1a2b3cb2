//! RTKLIB (rnx2rtkp) post processing invocation.
//!
//! rnx2rtkp resolves the rover positions from the rover and base station
//! observations, and the navigation data, and produces a solution file.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[cfg(feature = "log")]
use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("missing input file \"{0}\"")]
    MissingInput(PathBuf),
    #[error("failed to execute \"{path}\": {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("\"{path}\" failed ({status}): {stderr}")]
    ExitStatus {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("solution file \"{0}\" was not produced")]
    MissingOutput(PathBuf),
    #[error("failed to remove previous solution file \"{path}\": {source}")]
    StaleOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Post processing setup
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// rnx2rtkp executable
    pub executable_path: PathBuf,
    /// RTKLIB configuration file (-k)
    pub config_file_path: PathBuf,
    /// Rover observations (RINEX)
    pub rover_obs_path: PathBuf,
    /// Base station observations (RINEX)
    pub base_obs_path: PathBuf,
    /// Navigation data (RINEX)
    pub nav_path: PathBuf,
    /// Solution file to produce (-o)
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable_path: PathBuf::from("rnx2rtkp"),
            config_file_path: PathBuf::from("rtklib.conf"),
            rover_obs_path: Default::default(),
            base_obs_path: Default::default(),
            nav_path: Default::default(),
            output_path: PathBuf::from("solution.pos"),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with given executable
    pub fn with_executable(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.executable_path = path.to_path_buf();
        s
    }
    /// Copies and returns [Config] with given RTKLIB configuration file
    pub fn with_config_file(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.config_file_path = path.to_path_buf();
        s
    }
    /// Copies and returns [Config] with given rover observations
    pub fn with_rover_observations(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.rover_obs_path = path.to_path_buf();
        s
    }
    /// Copies and returns [Config] with given base station observations
    pub fn with_base_observations(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.base_obs_path = path.to_path_buf();
        s
    }
    /// Copies and returns [Config] with given navigation data
    pub fn with_navigation(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.nav_path = path.to_path_buf();
        s
    }
    /// Copies and returns [Config] with given output file
    pub fn with_output(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.output_path = path.to_path_buf();
        s
    }
}

/// rnx2rtkp invocation
pub struct Rnx2Rtkp<'a> {
    cfg: &'a Config,
}

impl<'a> Rnx2Rtkp<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }
    /// Command line arguments:
    /// `-o <output> -t -k <config> <rover> <base> <nav>`
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-o"),
            self.cfg.output_path.clone().into_os_string(),
            OsString::from("-t"),
            OsString::from("-k"),
            self.cfg.config_file_path.clone().into_os_string(),
            self.cfg.rover_obs_path.clone().into_os_string(),
            self.cfg.base_obs_path.clone().into_os_string(),
            self.cfg.nav_path.clone().into_os_string(),
        ]
    }
    /// Complete command line, for display purposes
    pub fn command_line(&self) -> String {
        let mut cmd = self.cfg.executable_path.to_string_lossy().to_string();
        for arg in self.args() {
            cmd.push(' ');
            cmd.push_str(&arg.to_string_lossy());
        }
        cmd
    }
    /// Verifies all input files exist, prior running anything
    fn check_inputs(&self) -> Result<(), ProcessError> {
        for path in [
            &self.cfg.config_file_path,
            &self.cfg.rover_obs_path,
            &self.cfg.base_obs_path,
            &self.cfg.nav_path,
        ] {
            if !path.is_file() {
                return Err(ProcessError::MissingInput(path.to_path_buf()));
            }
        }
        Ok(())
    }
    /// Removes the solution file of a previous run, so it can't
    /// be mistaken for a new one.
    fn discard_previous_output(&self) -> Result<(), ProcessError> {
        let path = &self.cfg.output_path;
        if path.exists() {
            std::fs::remove_file(path).map_err(|source| ProcessError::StaleOutput {
                path: path.to_path_buf(),
                source,
            })?;
            #[cfg(feature = "log")]
            debug!("\"{}\": previous solutions discarded", path.display());
        }
        Ok(())
    }
    /// Runs rnx2rtkp to completion and returns the path to the
    /// solution file that was produced.
    pub fn run(&self) -> Result<PathBuf, ProcessError> {
        self.check_inputs()?;
        self.discard_previous_output()?;

        #[cfg(feature = "log")]
        info!("running \"{}\"", self.command_line());

        let output = Command::new(&self.cfg.executable_path)
            .args(self.args())
            .output()
            .map_err(|source| ProcessError::Spawn {
                path: self.cfg.executable_path.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        #[cfg(feature = "log")]
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            for line in stdout.lines() {
                trace!("rnx2rtkp: {}", line);
            }
            // rnx2rtkp reports its progress on stderr
            for line in stderr.lines() {
                debug!("rnx2rtkp: {}", line);
            }
        }

        if !output.status.success() {
            return Err(ProcessError::ExitStatus {
                path: self.cfg.executable_path.clone(),
                status: output.status,
                stderr,
            });
        }

        if !self.cfg.output_path.is_file() {
            return Err(ProcessError::MissingOutput(self.cfg.output_path.clone()));
        }

        #[cfg(feature = "log")]
        info!("\"{}\" has been generated", self.cfg.output_path.display());

        Ok(self.cfg.output_path.clone())
    }
}
