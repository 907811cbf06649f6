// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    ViewerConfig, DEFAULT_ROTATION_STEP, DEFAULT_SHADOW_MAP_SIZE, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewer")]
#[command(about = "Interactive viewer for generated house scenes", long_about = None)]
pub struct Cli {
    /// Scene description JSON file, or `-` to read from stdin
    pub scene: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: u32,

    /// Disable the slow automatic scene rotation
    #[arg(long = "no-rotate", default_value = "false")]
    pub no_rotate: bool,

    /// Scene rotation per frame in radians
    #[arg(long, default_value_t = DEFAULT_ROTATION_STEP, value_parser = parse_rotation_step)]
    pub rotate_speed: f32,

    /// Edge length of the sun's shadow map
    #[arg(long, default_value_t = DEFAULT_SHADOW_MAP_SIZE)]
    pub shadow_map_size: u32,

    /// Disable multisample antialiasing
    #[arg(long = "no-antialias", default_value = "false")]
    pub no_antialias: bool,
}

fn parse_rotation_step(text: &str) -> Result<f32, String> {
    let step: f32 = text.parse().map_err(|e| format!("{}", e))?;
    if step.is_finite() {
        Ok(step)
    } else {
        Err(format!("rotation step must be finite, got {}", text))
    }
}

impl Cli {
    /// True when the scene should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.scene.as_os_str() == "-"
    }

    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            width: self.width.max(1),
            height: self.height.max(1),
            rotation_step: if self.no_rotate { 0.0 } else { self.rotate_speed },
            shadow_map_size: self.shadow_map_size.clamp(256, 8192),
            antialias: !self.no_antialias,
            ..ViewerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["scene-viewer", "house.json"]);
        let config = cli.viewer_config();

        assert!(!cli.reads_stdin());
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "scene-viewer",
            "-",
            "--width",
            "1024",
            "--no-rotate",
            "--no-antialias",
            "--shadow-map-size",
            "64",
        ]);
        let config = cli.viewer_config();

        assert!(cli.reads_stdin());
        assert_eq!(config.width, 1024);
        assert_eq!(config.rotation_step, 0.0);
        assert_eq!(config.sample_count(), 1);
        assert_eq!(config.shadow_map_size, 256);
    }

    #[test]
    fn test_rotate_speed_must_be_finite() {
        for bad in ["NaN", "inf", "-inf", "fast"] {
            let result = Cli::try_parse_from(["scene-viewer", "house.json", "--rotate-speed", bad]);
            assert!(result.is_err(), "accepted {}", bad);
        }

        let cli = Cli::parse_from(["scene-viewer", "house.json", "--rotate-speed=-0.01"]);
        assert_eq!(cli.viewer_config().rotation_step, -0.01);
    }
}
