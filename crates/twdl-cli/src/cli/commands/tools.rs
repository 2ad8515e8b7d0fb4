//! `twdl tools` – report external tool discovery.

use anyhow::Result;
use twdl_core::config::{self, TwdlConfig};
use twdl_core::logging;
use twdl_core::tools::{ToolPaths, FFMPEG, YT_DLP};

pub fn run_tools(cfg: &TwdlConfig) -> Result<i32> {
    let paths = ToolPaths::from_config(cfg);
    let fallback = cfg.fallback();

    println!("{:<12} {}", "TOOL", "PATH");
    let mut primary_found = false;
    for name in [YT_DLP, fallback.tool.as_str(), FFMPEG] {
        let shown = match paths.find(name) {
            Ok(p) => {
                if name == YT_DLP {
                    primary_found = true;
                }
                p.display().to_string()
            }
            Err(_) => "not found".to_string(),
        };
        println!("{:<12} {}", name, shown);
    }

    if let Some(dir) = paths.local_bin() {
        println!("\nLocal bin:  {}", dir.display());
    }
    if let Ok(p) = config::config_path() {
        println!("Config:     {}", p.display());
    }
    if let Ok(p) = logging::log_file_path() {
        println!("Log file:   {}", p.display());
    }
    if !fallback.enabled {
        println!("Fallback:   disabled in config");
    }

    Ok(if primary_found { 0 } else { 1 })
}
