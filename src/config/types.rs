use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub videos: VideoConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally reachable base URL used when handing out video links
    /// (e.g. `http://192.168.1.10:5000`). Falls back to the request's Host
    /// header when unset.
    #[serde(default)]
    pub public_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Directory all served clips live under.
    #[serde(default = "default_video_root")]
    pub root: PathBuf,
}

fn default_video_root() -> PathBuf {
    PathBuf::from("videos")
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            root: default_video_root(),
        }
    }
}

impl VideoConfig {
    /// Folder holding one clip per word.
    pub fn words_dir(&self) -> PathBuf {
        self.root.join("words")
    }

    /// Folder for generated output clips.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("output")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("sign_language.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}
