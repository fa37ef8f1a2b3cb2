//! Session workspace
use std::{
    fs::{create_dir_all, File},
    io::Result,
    path::{Path, PathBuf},
    process::Command,
};

use crate::cli::Cli;

/// Workspace, where all products of a session are generated
pub struct Workspace {
    /// Root Fullpath for this session
    pub root: PathBuf,
}

impl Workspace {
    /// Builds a new workspace either
    ///  1. from $RTKPOS_WORKSPACE environment variable
    ///  2. from -w workspace CLI argument
    ///  3. or defaults to ./WORKSPACE
    pub fn new(session: &str, cli: &Cli) -> Result<Self> {
        let root = match std::env::var("RTKPOS_WORKSPACE") {
            Ok(path) => Path::new(&path).join(session),
            _ => match cli.workspace() {
                Some(path) => path.join(session),
                None => Path::new("WORKSPACE").join(session),
            },
        };
        create_dir_all(&root)?;
        info!("session workspace is \"{}\"", root.display());
        Ok(Self { root })
    }
    /// Creates new file within this session
    pub fn create_file(&self, filename: &str) -> Result<File> {
        let fullpath = self.root.join(filename);
        let fd = File::create(&fullpath)?;
        info!("\"{}\" has been generated", fullpath.display());
        Ok(fd)
    }
    /// Opens given file with prefered web browser
    #[cfg(target_os = "linux")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        for browser in ["firefox", "chromium"] {
            if Command::new(browser).arg(&fullpath).spawn().is_ok() {
                return;
            }
        }
        warn!("no web browser available, open \"{}\" manually", fullpath);
    }
    /// Opens given file with prefered web browser
    #[cfg(target_os = "macos")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        if let Err(e) = Command::new("open").arg(&fullpath).output() {
            error!("failed to open \"{}\": {}", fullpath, e);
        }
    }
    /// Opens given file with prefered web browser
    #[cfg(target_os = "windows")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        if let Err(e) = Command::new("cmd")
            .arg("/C")
            .arg(format!(r#"start {}"#, fullpath))
            .output()
        {
            error!("failed to open \"{}\": {}", fullpath, e);
        }
    }
}
