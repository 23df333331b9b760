use std::path::PathBuf;

use anyhow::bail;
use vectorease::{init_logging, open_editor, BUILD_DATE, VERSION};

const USAGE: &str = "usage: vectorease [--config <editor.toml|editor.json>] [document.json]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut config = None;
    let mut document = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path\n{USAGE}"),
            },
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if document.is_none() => document = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    tracing::info!("VectorEase {} (built {})", VERSION, BUILD_DATE);

    let editor = open_editor(config.as_deref(), document.as_deref())?;
    let lines = editor.lines();
    let markers = lines
        .iter()
        .filter(|drawn| drawn.line.kind == vectorease::LineKind::Marker)
        .count();

    tracing::info!(
        "{} lines ({} markers), active tool {}, tracing image {}",
        lines.len(),
        markers,
        editor.active_tool(),
        if editor.tracing_image().is_some() { "present" } else { "absent" }
    );

    Ok(())
}
