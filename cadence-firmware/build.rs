//! Build script for cadence-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates workout.toml at compile time
//! - Generates the static exercise tables from it

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use cadence_core::config::{ExerciseConfig, WorkoutConfig};

fn main() {
    setup_linker();
    let config = load_workout();
    generate_tables(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Read, parse and validate workout.toml
fn load_workout() -> WorkoutConfig {
    println!("cargo:rerun-if-changed=workout.toml");

    let config_path = Path::new("workout.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: workout.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a workout.toml definition file.           ║\n\
            ║  Please create one in the cadence-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read workout.toml", &[e.to_string()]),
    };

    let config: WorkoutConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid workout.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    if let Err(e) = config.validate() {
        fail("Invalid workout definition", &[e.to_string()]);
    }

    println!("cargo:warning=workout.toml validated successfully");
    config
}

/// Abort the build with a boxed error report
fn fail(title: &str, details: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(details)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `workout.rs` into OUT_DIR
fn generate_tables(config: &WorkoutConfig) {
    let mut out = String::new();
    writeln!(out, "// Generated from workout.toml by build.rs").unwrap();
    writeln!(out, "pub const LABEL: &str = {:?};", config.label.as_str()).unwrap();
    writeln!(
        out,
        "pub const STRENGTH_ROUNDS: u8 = {};",
        config.strength_rounds
    )
    .unwrap();

    write_table(&mut out, "WARMUP", &config.warmup);
    write_table(&mut out, "STRENGTH", &config.strength);
    write_table(&mut out, "COOLDOWN", &config.cooldown);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("workout.rs"), out).unwrap();
}

fn write_table(out: &mut String, name: &str, exercises: &[ExerciseConfig]) {
    writeln!(
        out,
        "pub static {}: [ExerciseDefinition<'static>; {}] = [",
        name,
        exercises.len()
    )
    .unwrap();
    for e in exercises {
        writeln!(
            out,
            "    ExerciseDefinition::new({:?}, {:?}, {:?}, {}),",
            e.key.as_str(),
            e.title.as_str(),
            e.cue.as_str(),
            e.duration_s
        )
        .unwrap();
    }
    writeln!(out, "];").unwrap();
}
