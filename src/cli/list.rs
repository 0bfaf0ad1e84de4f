use std::{fmt::Write, path::PathBuf};

use clap::{CommandFactory, Parser};
use sprite_area::SpriteArea;

use super::{load_config, parse_module_args, Cli, CliRes, SourceArgs};

#[derive(Debug, Parser)]
#[command(name = "list", about = "Lists the sprites of a sprite pool")]
struct ListCli {
    #[command(flatten)]
    source: SourceArgs,
    /// Config file to use instead of the one next to the binary
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub struct List;

impl Cli for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn cli(&self) -> CliRes {
        if std::env::args().len() <= 2 {
            self.cli_help();
            return CliRes::Err;
        }

        let cli = match parse_module_args::<ListCli>() {
            Ok(cli) => cli,
            Err(res) => return res,
        };

        let listing = load_config(cli.config.as_deref())
            .and_then(|config| cli.source.read_area(&config))
            .and_then(|bytes| list_sprites(&bytes));

        match listing {
            Ok(listing) => {
                print!("{}", listing);
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        let _ = ListCli::command().print_help();
    }
}

fn list_sprites(bytes: &[u8]) -> eyre::Result<String> {
    let area = SpriteArea::from_bytes(bytes)?;
    let header = area.header;

    let mut out = String::new();

    writeln!(
        out,
        "{} sprites, first at {:#x}, {:#x} of {:#x} bytes used",
        header.sprite_count, header.first, header.used, header.size
    )?;

    for record in area.records() {
        let record = record?;

        let name = if record.is_valid() {
            record.name.to_string()
        } else {
            "<deleted>".to_string()
        };

        writeln!(
            out,
            "{:>4}  {:<12}  {:>8}  {:#08x}",
            record.index, name, record.size, record.offset
        )?;
    }

    Ok(out)
}
