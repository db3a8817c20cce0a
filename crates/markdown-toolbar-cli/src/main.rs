use anyhow::{Context, Result, bail};
use markdown_toolbar_config::Config;
use markdown_toolbar_engine::{
    CommandEngine, DocumentSession, FileStore, FsFileBridge, MarkdownRenderer, io,
    render_standalone_html,
};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::{env, process};

const USAGE: &str = "\
<file> <tag> [value] [--select START..END]
       <file> --render
       <file> --export-html OUT
       <file> --export DIR
       <file> --position OFFSET";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Apply {
        tag: String,
        value: Option<String>,
        selection: Option<Range<usize>>,
    },
    Render,
    ExportHtml(PathBuf),
    Export(PathBuf),
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    file: PathBuf,
    action: Action,
}

impl Invocation {
    fn parse(args: &[String]) -> Result<Self> {
        let Some((file, rest)) = args.split_first() else {
            bail!("No file given");
        };
        let file = PathBuf::from(file);

        let action = match rest {
            [flag] if flag == "--render" => Action::Render,
            [flag, out] if flag == "--export-html" => Action::ExportHtml(PathBuf::from(out)),
            [flag, dir] if flag == "--export" => Action::Export(PathBuf::from(dir)),
            [flag, offset] if flag == "--position" => Action::Position(
                offset
                    .parse()
                    .with_context(|| format!("Invalid offset '{offset}'"))?,
            ),
            [tag, rest @ ..] if !tag.starts_with("--") => parse_apply(tag, rest)?,
            _ => bail!("Unrecognised arguments"),
        };

        Ok(Self { file, action })
    }
}

fn parse_apply(tag: &str, rest: &[String]) -> Result<Action> {
    let mut value = None;
    let mut selection = None;

    let mut args = rest.iter();
    while let Some(arg) = args.next() {
        if arg == "--select" {
            let Some(range) = args.next() else {
                bail!("--select needs START..END");
            };
            selection = Some(parse_range(range)?);
        } else if value.is_none() && !arg.starts_with("--") {
            value = Some(arg.clone());
        } else {
            bail!("Unexpected argument '{arg}'");
        }
    }

    Ok(Action::Apply {
        tag: tag.to_string(),
        value,
        selection,
    })
}

fn parse_range(range: &str) -> Result<Range<usize>> {
    let (start, end) = range
        .split_once("..")
        .with_context(|| format!("Expected START..END, got '{range}'"))?;
    let start: usize = start
        .parse()
        .with_context(|| format!("Invalid selection start '{start}'"))?;
    let end: usize = end
        .parse()
        .with_context(|| format!("Invalid selection end '{end}'"))?;
    if start > end {
        bail!("Selection start {start} is after end {end}");
    }
    Ok(start..end)
}

/// Open `file` in a session backed by the configured storage directory
fn open_session(config: &Config, file: &Path) -> Result<DocumentSession> {
    let mut session = DocumentSession::new(
        CommandEngine::new(config.engine_options()),
        MarkdownRenderer::default(),
        FileStore::new(&config.storage_dir),
    );

    if file.exists() {
        let files = FsFileBridge::new(&config.storage_dir);
        session.import(&files, file)?;
    } else {
        log::info!("{} does not exist yet, starting empty", file.display());
    }

    Ok(session)
}

fn run(invocation: Invocation) -> Result<()> {
    let config = Config::load_or_default()?;
    log::info!("Storage directory: {}", config.storage_dir.display());

    let mut session = open_session(&config, &invocation.file)?;

    match invocation.action {
        Action::Apply {
            tag,
            value,
            selection,
        } => {
            let end = session.text().chars().count();
            session.set_selection(selection.unwrap_or(end..end))?;

            let patch = session.apply_tag(&tag, value.as_deref())?;
            io::write_file(&invocation.file, &session.text())?;

            let position = session.cursor_position();
            log::info!(
                "Applied {tag} to {}, version {}",
                invocation.file.display(),
                patch.version
            );
            println!(
                "cursor {} (line {}, column {})",
                patch.new_selection.start, position.line, position.column
            );
        }
        Action::Render => {
            print!("{}", session.preview());
        }
        Action::ExportHtml(out) => {
            let title = invocation
                .file
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "markdown".to_string());
            let page = render_standalone_html(&title, session.preview());
            io::write_file(&out, &page)?;
            println!("{}", out.display());
        }
        Action::Export(dir) => {
            let mut files = FsFileBridge::new(&dir);
            let exported = session.export(&mut files)?;
            println!("{}", dir.join(exported.filename).display());
        }
        Action::Position(offset) => {
            session.set_selection(offset..offset)?;
            let position = session.cursor_position();
            println!("{}:{}", position.line, position.column);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "markdown-toolbar".to_string());

    let invocation = match Invocation::parse(args.get(1..).unwrap_or_default()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Usage: {program_name} {USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(invocation) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
