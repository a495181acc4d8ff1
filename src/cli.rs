//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::convert::{parse_bool_or, parse_or};
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "inistore", about = "Read and edit INI configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single value
    Get {
        file: PathBuf,
        key: String,
        #[arg(short, long)]
        section: Option<String>,
        #[arg(short, long, default_value = "")]
        default: String,
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },
    /// Set a value, creating the file if needed
    Set {
        file: PathBuf,
        key: String,
        value: String,
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print the whole file as it would be saved
    Dump { file: PathBuf },
    /// List section names
    Sections { file: PathBuf },
}

/// Type a value is read as before printing.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Get {
            file,
            key,
            section,
            default,
            kind,
        } => run_get(&file, &key, section.as_deref(), &default, kind),
        Command::Set {
            file,
            key,
            value,
            section,
        } => run_set(&file, key, value, section.as_deref()),
        Command::Dump { file } => run_dump(&file),
        Command::Sections { file } => run_sections(&file),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::open(path).ok_or_else(|| {
        eprintln!("error: cannot open {}", path.display());
        ExitCode::from(2)
    })
}

/// Read `key` as `kind` and render it back to text.
///
/// `default` is converted with the same rules as stored values, so an
/// unparsable default falls back to the type's zero value.
pub fn resolve_value(
    config: &dyn ConfigPort,
    key: &str,
    section: Option<&str>,
    default: &str,
    kind: ValueKind,
) -> String {
    let raw = Some(default);
    match kind {
        ValueKind::String => config.get_string(key, default, section),
        ValueKind::Bool => config
            .get_bool(key, parse_bool_or(raw, false), section)
            .to_string(),
        ValueKind::I8 => config.get_i8(key, parse_or(raw, 0), section).to_string(),
        ValueKind::U8 => config.get_u8(key, parse_or(raw, 0), section).to_string(),
        ValueKind::I16 => config.get_i16(key, parse_or(raw, 0), section).to_string(),
        ValueKind::U16 => config.get_u16(key, parse_or(raw, 0), section).to_string(),
        ValueKind::I32 => config.get_i32(key, parse_or(raw, 0), section).to_string(),
        ValueKind::U32 => config.get_u32(key, parse_or(raw, 0), section).to_string(),
        ValueKind::I64 => config.get_i64(key, parse_or(raw, 0), section).to_string(),
        ValueKind::U64 => config.get_u64(key, parse_or(raw, 0), section).to_string(),
        ValueKind::F32 => config.get_f32(key, parse_or(raw, 0.0), section).to_string(),
        ValueKind::F64 => config.get_f64(key, parse_or(raw, 0.0), section).to_string(),
    }
}

fn run_get(
    path: &Path,
    key: &str,
    section: Option<&str>,
    default: &str,
    kind: ValueKind,
) -> ExitCode {
    let adapter = match load_config(path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    println!("{}", resolve_value(&adapter, key, section, default, kind));
    ExitCode::SUCCESS
}

fn run_set(path: &Path, key: String, value: String, section: Option<&str>) -> ExitCode {
    let mut adapter = if path.exists() {
        match FileConfigAdapter::load(path) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    } else {
        eprintln!("Creating {}", path.display());
        FileConfigAdapter::new(path)
    };
    adapter.store_mut().set_string(key, value, section);
    if let Err(e) = adapter.save() {
        eprintln!("error: {e}");
        return (&e).into();
    }
    ExitCode::SUCCESS
}

fn run_dump(path: &Path) -> ExitCode {
    let adapter = match load_config(path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    print!("{}", adapter.store());
    ExitCode::SUCCESS
}

fn run_sections(path: &Path) -> ExitCode {
    let adapter = match load_config(path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    for name in adapter.store().section_names() {
        println!("{name}");
    }
    ExitCode::SUCCESS
}
