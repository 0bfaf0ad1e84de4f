use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use sprite_area::{file_type::CommaSuffix, save_sprite_area_with, SaveMode, SpriteArea};

use super::{load_config, parse_module_args, Cli, CliRes, SourceArgs};

#[derive(Debug, Parser)]
#[command(
    name = "save",
    about = "Saves a sprite pool as a sprite file, leaving out deleted sprites"
)]
struct SaveCli {
    #[command(flatten)]
    source: SourceArgs,
    /// Sprite file to write. Gets a `,ff9` suffix once saved
    output: PathBuf,
    /// Keep deleted sprites and save the area exactly as it is in memory
    #[arg(long)]
    no_squash: bool,
    /// Config file to use instead of the one next to the binary
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub struct Save;

impl Cli for Save {
    fn name(&self) -> &'static str {
        "save"
    }

    fn cli(&self) -> CliRes {
        if std::env::args().len() <= 2 {
            self.cli_help();
            return CliRes::Err;
        }

        let cli = match parse_module_args::<SaveCli>() {
            Ok(cli) => cli,
            Err(res) => return res,
        };

        match save(&cli) {
            Ok(path) => {
                println!("Saved {}", path.display());
                CliRes::Ok
            }
            Err(err) => {
                println!("Save failed: {}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        let _ = SaveCli::command().print_help();
    }
}

fn save(cli: &SaveCli) -> eyre::Result<PathBuf> {
    let config = load_config(cli.config.as_deref())?;
    let bytes = cli.source.read_area(&config)?;

    let mode = if cli.no_squash || !config.squash {
        SaveMode::Verbatim
    } else {
        SaveMode::Squash
    };

    save_bytes(&bytes, &cli.output, mode)
}

fn save_bytes(bytes: &[u8], output: &Path, mode: SaveMode) -> eyre::Result<PathBuf> {
    let area = SpriteArea::from_bytes(bytes)?;

    log::info!(
        "saving {} sprites to {} ({:?})",
        area.header.sprite_count,
        output.display(),
        mode
    );

    let path = save_sprite_area_with(&area, output, mode, &CommaSuffix)?;

    Ok(path)
}
