//! urnik: download a faculty timetable and make it editable.
//!
//! Fetches the programme's timetable page (through a JSON page cache),
//! writes it untouched to `original.html`, rewrites it and writes
//! `modified.html`, then prints the `file://` URL of the result.

mod args;
mod cache;
mod error;
mod fetch;
mod page;
mod schedule;

use args::Args;
use clap::Parser;
use error::CliError;
use fetch::Fetcher;
use page::{ENTRY_LIGHTNESS, PageAssets};
use std::path::Path;
use std::process::ExitCode;
use url::Url;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args).await {
        Ok(url) => {
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<Url, CliError> {
    let fetcher = Fetcher::new(args.cache_file.clone());

    let timetable = timetable_url(&fetcher, args).await?;
    let original = fetcher.page(&timetable, args.use_cache).await?;
    write_page(&args.out_dir, "original.html", &original)?;

    let assets = PageAssets {
        script_src: args.script_src.clone(),
        stylesheet: args.stylesheet.clone(),
        lightness: ENTRY_LIGHTNESS,
    };
    let modified = page::rewrite_page(&original, &assets)?;
    let path = write_page(&args.out_dir, "modified.html", &modified)?;

    let absolute = path.canonicalize().map_err(|e| CliError::io(&path, e))?;
    Url::from_file_path(&absolute).map_err(|()| CliError::NotAFileUrl(absolute))
}

/// Look the programme up on the index page. The index rarely changes, so it
/// is always read through the cache; `-c` only refreshes the timetable.
async fn timetable_url(fetcher: &Fetcher, args: &Args) -> Result<Url, CliError> {
    let index = fetcher.page(&args.base_url, true).await?;
    let timetable = schedule::program_url(&args.base_url, &index, &args.program)?;
    Ok(schedule::with_day(timetable, args.date.as_deref()))
}

fn write_page(dir: &Path, name: &str, html: &str) -> Result<std::path::PathBuf, CliError> {
    std::fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
    let path = dir.join(name);
    std::fs::write(&path, html).map_err(|e| CliError::io(&path, e))?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}
