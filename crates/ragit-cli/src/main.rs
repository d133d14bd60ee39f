use anyhow::{Context, Result};
use ragit_config::Config;
use ragit_engine::{chunk_records, io, parsing::render::dump};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tree { file: PathBuf },
    Chunks { file: PathBuf, json: bool },
    Scan { dir: Option<PathBuf> },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [cmd, file] if cmd == "tree" => Some(Self::Tree {
                file: PathBuf::from(file),
            }),
            [cmd, file] if cmd == "chunks" => Some(Self::Chunks {
                file: PathBuf::from(file),
                json: false,
            }),
            [cmd, file, flag] | [cmd, flag, file] if cmd == "chunks" && flag == "--json" => {
                Some(Self::Chunks {
                    file: PathBuf::from(file),
                    json: true,
                })
            }
            [cmd] if cmd == "scan" => Some(Self::Scan { dir: None }),
            [cmd, dir] if cmd == "scan" => Some(Self::Scan {
                dir: Some(PathBuf::from(dir)),
            }),
            _ => None,
        }
    }
}

fn usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} tree <file.md>");
    eprintln!("  {program} chunks <file.md> [--json]");
    eprintln!("  {program} scan [documents-dir]");
}

fn tree(config: &Config, file: &Path) -> Result<String> {
    let tree = io::parse_file(file, &config.parse_options())?;
    Ok(dump(&tree, &config.dump_indent))
}

fn chunks(config: &Config, file: &Path, json: bool) -> Result<String> {
    let tree = io::parse_file(file, &config.parse_options())?;
    let records = chunk_records(
        &tree,
        &file.display().to_string(),
        &config.header_delimiter,
    );

    if json {
        return Ok(serde_json::to_string_pretty(&records)?);
    }
    Ok(records
        .iter()
        .map(|r| r.content())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn scan(config: &Config, dir: Option<PathBuf>) -> Result<String> {
    let from_config = dir.is_none();
    let Some(dir) = dir.or_else(|| config.documents_path.clone()) else {
        anyhow::bail!(
            "No documents directory given and none set in {}",
            Config::config_path().display()
        );
    };

    io::validate_documents_dir(&dir).with_context(|| {
        let source = if from_config {
            format!(" from config file '{}'", Config::config_path().display())
        } else {
            String::new()
        };
        format!("Documents path '{}'{source} is invalid", dir.display())
    })?;

    let mut lines = Vec::new();
    for file in io::scan_markdown_files(&dir)? {
        let shown = file.strip_prefix(&dir).unwrap_or(&file).display().to_string();
        match io::parse_file(&file, &config.parse_options()) {
            Ok(tree) => lines.push(format!("{}\t{shown}", tree.chunks().count())),
            Err(e) => {
                log::warn!("skipping {shown}: {e}");
                lines.push(format!("error\t{shown}"));
            }
        }
    }
    Ok(lines.join("\n"))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ragit-md");

    let Some(command) = Command::parse(args.get(1..).unwrap_or_default()) else {
        usage(program);
        process::exit(2);
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::debug!("using {config:?}");

    let output = match command {
        Command::Tree { file } => tree(&config, &file)?,
        Command::Chunks { file, json } => chunks(&config, &file, json)?,
        Command::Scan { dir } => scan(&config, dir)?,
    };
    println!("{output}");

    Ok(())
}
