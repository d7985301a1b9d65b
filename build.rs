use clap::{Command, CommandFactory, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "slackfmt";

fn write_man_page(dir: &Path, page: Command, title: &str) -> Result<()> {
    let mut roff = Vec::new();
    Man::new(page).title(title).render(&mut roff)?;
    fs::write(dir.join(format!("{title}.1")), roff)
}

/// `slackfmt.1` plus `slackfmt-format.1` and `slackfmt-rules.1`.
fn man_pages(cmd: &Command, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_man_page(dir, cmd.clone(), BIN)?;
    for sub in cmd.get_subcommands().filter(|sub| sub.get_name() != "help") {
        write_man_page(dir, sub.clone(), &format!("{BIN}-{}", sub.get_name()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let mut cmd = cli::Cli::command();

    if let Some(out_dir) = env::var_os("OUT_DIR") {
        for &shell in Shell::value_variants() {
            generate_to(shell, &mut cmd, BIN, &out_dir)?;
        }
    }

    man_pages(&cmd, &PathBuf::from("target").join("man"))
}
