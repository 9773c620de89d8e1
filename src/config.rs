//! Session Configuration
//!
//! Everything the session needs to know about the host, collected once at
//! startup. Commands and the prompt read from this struct instead of
//! querying the process environment themselves.

use std::collections::HashMap;
use std::path::PathBuf;

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    pub username: String,
    pub hostname: String,
    /// Real working directory of the process.
    pub cwd: String,
    pub home: String,
    pub vfs_path: Option<PathBuf>,
    pub startup_script: Option<PathBuf>,
    pub debug: bool,
    /// Snapshot of the environment used for `$NAME` expansion.
    pub env: HashMap<String, String>,
}

impl ShellConfig {
    /// Collect configuration from the running process.
    pub fn from_process() -> Self {
        let env: HashMap<String, String> = std::env::vars().collect();
        let username = env
            .get("USER")
            .or_else(|| env.get("LOGNAME"))
            .cloned()
            .unwrap_or_else(current_uid);
        let home = env.get("HOME").cloned().unwrap_or_else(|| "/".to_string());
        let cwd = std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| home.clone());

        Self {
            username,
            hostname: host_name(),
            cwd,
            home,
            vfs_path: None,
            startup_script: None,
            debug: false,
            env,
        }
    }

    pub fn with_vfs_path(mut self, path: Option<PathBuf>) -> Self {
        self.vfs_path = path;
        self
    }

    pub fn with_startup_script(mut self, path: Option<PathBuf>) -> Self {
        self.startup_script = path;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Real working directory with the home prefix shown as `~`.
    pub fn display_cwd(&self) -> String {
        abbreviate_home(&self.cwd, &self.home)
    }

    /// Render the configuration as `key=value` lines.
    pub fn dump(&self) -> String {
        let path_or_none = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".to_string())
        };
        let mut out = String::new();
        out.push_str(&format!("username={}\n", self.username));
        out.push_str(&format!("hostname={}\n", self.hostname));
        out.push_str(&format!("cwd={}\n", self.cwd));
        out.push_str(&format!("home={}\n", self.home));
        out.push_str(&format!("vfs_path={}\n", path_or_none(&self.vfs_path)));
        out.push_str(&format!("startup_script={}\n", path_or_none(&self.startup_script)));
        out.push_str(&format!("debug={}\n", self.debug));
        out
    }
}

/// Replace a leading `home` in `path` with `~`.
pub fn abbreviate_home(path: &str, home: &str) -> String {
    if home.is_empty() || home == "/" {
        return path.to_string();
    }
    if path == home {
        "~".to_string()
    } else if let Some(rest) = path.strip_prefix(home).filter(|r| r.starts_with('/')) {
        format!("~{}", rest)
    } else {
        path.to_string()
    }
}

fn current_uid() -> String {
    unsafe { libc::getuid() }.to_string()
}

fn host_name() -> String {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return "localhost".to_string();
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let name = String::from_utf8_lossy(&buf[..len]).into_owned();
    if name.is_empty() {
        "localhost".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShellConfig {
        ShellConfig {
            username: "alice".into(),
            hostname: "box".into(),
            cwd: "/home/alice/src".into(),
            home: "/home/alice".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_abbreviate_home() {
        assert_eq!(abbreviate_home("/home/alice", "/home/alice"), "~");
        assert_eq!(abbreviate_home("/home/alice/src", "/home/alice"), "~/src");
        assert_eq!(abbreviate_home("/home/alicex", "/home/alice"), "/home/alicex");
        assert_eq!(abbreviate_home("/tmp", "/home/alice"), "/tmp");
        assert_eq!(abbreviate_home("/tmp", "/"), "/tmp");
    }

    #[test]
    fn test_display_cwd() {
        assert_eq!(config().display_cwd(), "~/src");
    }

    #[test]
    fn test_dump_is_pure_function_of_config() {
        let cfg = config()
            .with_vfs_path(Some(PathBuf::from("/data/vfs.json")))
            .with_debug(true);
        let dump = cfg.dump();
        assert!(dump.contains("username=alice\n"));
        assert!(dump.contains("hostname=box\n"));
        assert!(dump.contains("vfs_path=/data/vfs.json\n"));
        assert!(dump.contains("startup_script=<none>\n"));
        assert!(dump.contains("debug=true\n"));
        assert_eq!(dump, cfg.dump());
    }

    #[test]
    fn test_from_process_fills_identity() {
        let cfg = ShellConfig::from_process();
        assert!(!cfg.username.is_empty());
        assert!(!cfg.hostname.is_empty());
        assert!(!cfg.cwd.is_empty());
    }
}
