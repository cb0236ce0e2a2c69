//! Build script for desm0-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates `board_config.rs` constants from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use desm0_core::config::BoardConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = validate_config();
    generate_constants(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardConfig {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the desm0-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML into the typed config; missing keys take their defaults
    let config: BoardConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Range checks
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml validation failed                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!("cargo:warning=board.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated config as Rust constants
fn generate_constants(out_dir: &Path, config: &BoardConfig) {
    let mut code = String::new();
    code.push_str("// Generated from board.toml by build.rs\n\n");
    code.push_str(&format!(
        "pub const RX_CAPACITY: usize = {};\n",
        config.rx_capacity
    ));
    code.push_str(&format!(
        "pub const CORE_CLOCK_HZ: u32 = {};\n",
        config.core_clock_hz
    ));
    code.push_str(&format!(
        "pub const SPI_HALF_BIT_NS: u32 = {};\n",
        config.spi_half_bit_ns
    ));
    code.push_str(&format!(
        "pub const SYSTICK_RELOAD: u32 = {};\n",
        config.systick_reload
    ));
    code.push_str(&format!(
        "pub const REFRESH_TICKS: u32 = {};\n",
        config.refresh_ticks
    ));

    code.push_str(&format!(
        "pub const TICK_RATE_MHZ: u64 = {};\n",
        config.tick_rate_mhz()
    ));
    code.push_str(&format!(
        "pub const REFRESH_PERIOD_MS: u64 = {};\n",
        config.refresh_period_ms()
    ));

    code.push_str("pub const ACCEL_INIT: &[RegisterWrite] = &[\n");
    for write in &config.accel_init {
        code.push_str(&format!(
            "    RegisterWrite::new({:#04X}, {:#04X}),\n",
            write.address, write.value
        ));
    }
    code.push_str("];\n");

    fs::write(out_dir.join("board_config.rs"), code).unwrap();
}
