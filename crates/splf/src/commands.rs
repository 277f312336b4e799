//! Command implementations.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::{debug, info};

use splf_catalog::{
    build_file_path, filter_spooled_files, search_spooled_file, sort_spooled_files, SearchResult,
};
use splf_core::{FilterType, OpenOptions, SpooledFile, ToolConfig};
use splf_printer::{decode_text, render_bytes, LINE_SEPARATOR};

use crate::cli::{Cli, Command, ListArgs, ReformatArgs, SearchArgs};

/// Rendered text of one input file.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Input path
    pub input: PathBuf,
    /// Rendered text
    pub text: String,
}

/// Run a parsed command line, writing command output to `out`.
pub async fn run<W: Write>(cli: Cli, config: &ToolConfig, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Command::Reformat(args) => {
            let rendered = reformat(config, &args).await?;
            if args.out_dir.is_none() {
                for file in &rendered {
                    write!(out, "{}{LINE_SEPARATOR}", file.text)?;
                }
            }
        }
        Command::Search(args) => {
            let results = search(config, &args).await?;
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &results)?;
                writeln!(out)?;
            } else {
                for result in &results {
                    for line in &result.lines {
                        writeln!(out, "{}:{}:{}", result.path, line.number, line.content)?;
                    }
                }
            }
        }
        Command::List(args) => {
            for path in list(config, &args).await? {
                writeln!(out, "{path}")?;
            }
        }
    }
    Ok(())
}

/// Render print-stream files concurrently, one task per file.
///
/// Results keep the order of `paths`. The first failure aborts the command.
pub async fn render_files(paths: &[PathBuf], options: &OpenOptions) -> anyhow::Result<Vec<RenderedFile>> {
    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.clone();
        let options = options.clone();
        tasks.push(tokio::spawn(async move {
            let raw = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!("Read {} bytes from {}", raw.len(), path.display());

            let text = tokio::task::spawn_blocking(move || render_bytes(&raw, &options))
                .await?
                .with_context(|| format!("Failed to render {}", path.display()))?;
            Ok::<_, anyhow::Error>(RenderedFile { input: path, text })
        }));
    }

    let mut rendered = Vec::with_capacity(tasks.len());
    for task in tasks {
        rendered.push(task.await??);
    }
    Ok(rendered)
}

/// Output path for a rendered input inside `out_dir`.
pub fn output_path(out_dir: &Path, input: &Path, extension: &str) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("Input has no file name: {}", input.display()))?;
    let output = out_dir.join(format!("{}.{extension}", stem.to_string_lossy()));
    if output == input {
        bail!("Refusing to overwrite input file {}", input.display());
    }
    Ok(output)
}

/// Output paths for every input, refusing two inputs that map to one output.
pub fn output_paths(out_dir: &Path, inputs: &[PathBuf], extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut outputs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = output_path(out_dir, input, extension)?;
        if !seen.insert(output.clone()) {
            bail!(
                "{} would overwrite the output of another input: {}",
                input.display(),
                output.display()
            );
        }
        outputs.push(output);
    }
    Ok(outputs)
}

/// `splf reformat`: render files and write them to the output directory.
///
/// Without an output directory exactly one input is accepted and nothing is
/// written; the caller prints the returned text.
pub async fn reformat(config: &ToolConfig, args: &ReformatArgs) -> anyhow::Result<Vec<RenderedFile>> {
    if args.out_dir.is_none() && args.files.len() > 1 {
        bail!("--out-dir is required when reformatting more than one file");
    }

    let options = args.render.open_options(config);
    let outputs = match &args.out_dir {
        Some(out_dir) => output_paths(out_dir, &args.files, &options.file_extension)?,
        None => Vec::new(),
    };
    info!(
        "Reformatting {} file(s): mode {:?}, page length {}",
        args.files.len(),
        options.open_mode,
        options.page_length()
    );
    let rendered = render_files(&args.files, &options).await?;

    if let Some(out_dir) = &args.out_dir {
        tokio::fs::create_dir_all(out_dir)
            .await
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;
        for (file, output) in rendered.iter().zip(&outputs) {
            tokio::fs::write(output, &file.text)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {} ({} bytes)", output.display(), file.text.len());
        }
    }

    Ok(rendered)
}

/// `splf search`: search rendered files for a term.
pub async fn search(config: &ToolConfig, args: &SearchArgs) -> anyhow::Result<Vec<SearchResult>> {
    let options = args.render.open_options(config);
    let mut tasks = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let path = path.clone();
        let term = args.term.clone();
        let options = options.clone();
        tasks.push(tokio::spawn(async move {
            let raw = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path.display().to_string();
            let result = tokio::task::spawn_blocking(move || {
                decode_text(&raw).map(|text| search_spooled_file(&name, text, &term, &options))
            })
            .await?
            .with_context(|| format!("Failed to search {}", path.display()))?;
            Ok::<_, anyhow::Error>(result)
        }));
    }

    let mut results = Vec::new();
    for task in tasks {
        if let Some(result) = task.await?? {
            results.push(result);
        }
    }
    info!(
        "Search for '{}' matched {} of {} file(s)",
        args.term,
        results.len(),
        args.files.len()
    );
    Ok(results)
}

/// `splf list`: filter and sort a catalog, returning local file paths.
pub async fn list(config: &ToolConfig, args: &ListArgs) -> anyhow::Result<Vec<String>> {
    let json = tokio::fs::read_to_string(&args.catalog)
        .await
        .with_context(|| format!("Failed to read {}", args.catalog.display()))?;
    let catalog = SpooledFile::list_from_json(&json)
        .with_context(|| format!("Invalid spooled file catalog {}", args.catalog.display()))?;

    let total = catalog.len();
    let mut files = filter_spooled_files(catalog, args.search.as_deref());
    if files.len() < total {
        debug!("Filter kept {} of {} spooled files", files.len(), total);
    }
    sort_spooled_files(&mut files, args.sort_options());

    let filter_type = if args.outq {
        FilterType::OutputQueue
    } else {
        config.naming.filter_type
    };

    let mut paths = Vec::with_capacity(files.len());
    for splf in &files {
        paths.push(build_file_path(
            filter_type,
            splf,
            Some(&config.naming.name_pattern),
            &config.printer.file_extension,
        )?);
    }
    Ok(paths)
}
