use std::path::{Path, PathBuf};

use clap::Args;

use crate::{
    config::{parse_config, parse_config_from_file, Config},
    pools::{DumpPools, PoolSource, SpritePool},
};

use self::{list::List, save::Save};

mod list;
mod save;

pub enum CliRes {
    NoCli,
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module has to handle the arguments by itself.
    ///
    /// `args[1]` is the name of the module.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Runs command-line options
pub fn cli() -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Save, &List];

    let help = || {
        println!(
            "\
grab

Saves the desktop's sprite pools as sprite files.

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    if args.len() < 2 {
        help();
        return CliRes::NoCli;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}

/// Where the sprite area comes from. Exactly one of these.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Sprite pool to read, using the memory image from the config
    #[arg(short, long, value_enum)]
    pub pool: Option<SpritePool>,
    /// Memory image of a sprite area, starting at its size word
    #[arg(short, long)]
    pub area: Option<PathBuf>,
}

impl SourceArgs {
    pub fn read_area(&self, config: &Config) -> eyre::Result<Vec<u8>> {
        match (&self.pool, &self.area) {
            (Some(pool), _) => DumpPools::new(config).sprite_area(*pool),
            (None, Some(area)) => Ok(sprite_area::read_bytes(area)?),
            // clap makes sure one of them is given
            (None, None) => crate::err!("No sprite area given"),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> eyre::Result<Config> {
    match path {
        Some(path) => parse_config_from_file(path),
        None => parse_config(),
    }
}

/// Parses arguments for a module with clap.
///
/// On `Err` clap has already printed its message and the module should exit with the result.
fn parse_module_args<T: clap::Parser>() -> Result<T, CliRes> {
    // skips "grab" so clap sees the module name as the binary name
    match T::try_parse_from(std::env::args().skip(1)) {
        Ok(args) => Ok(args),
        Err(err) => {
            let _ = err.print();

            if err.use_stderr() {
                Err(CliRes::Err)
            } else {
                // --help and --version
                Err(CliRes::Ok)
            }
        }
    }
}
