//! Command-line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://urniki.bf.uni-lj.si";

#[derive(Debug, Parser)]
#[command(
    name = "urnik",
    version,
    about = "Create your own editable copy of a faculty timetable.",
    after_help = "In the generated page: click a box to hide it, Ctrl+Z brings the last one back, \
                  Ctrl+O snaps every box onto the day grid."
)]
pub struct Args {
    /// Programme and year (e.g. BTUN-1)
    pub program: String,

    /// Timetable date (e.g. 2025-03-03)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<String>,

    /// Disable caching
    #[arg(short = 'c', long = "cache", action = ArgAction::SetFalse)]
    pub use_cache: bool,

    /// Timetable site to scrape
    #[arg(long, env = "URNIK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Where downloaded pages are cached
    #[arg(long, env = "URNIK_CACHE_FILE", default_value = "cache.json")]
    pub cache_file: PathBuf,

    /// Directory for original.html and modified.html
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Module script the page loads (the wasm-pack output)
    #[arg(long, default_value = "./static/urnik_wasm.js")]
    pub script_src: String,

    /// Stylesheet the page links
    #[arg(long, default_value = "static/style.css")]
    pub stylesheet: String,
}

/// Accept `YYYY-MM-DD`.
fn parse_date(s: &str) -> Result<String, String> {
    let parts: Vec<&str> = s.split('-').collect();
    let ok = matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())));
    if ok {
        Ok(s.to_string())
    } else {
        Err(format!("expected YYYY-MM-DD, got {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["urnik", "BTUN-1"]).unwrap();
        assert_eq!(args.program, "BTUN-1");
        assert_eq!(args.date, None);
        assert!(args.use_cache);
        assert_eq!(args.cache_file, PathBuf::from("cache.json"));
        assert_eq!(args.script_src, "./static/urnik_wasm.js");
    }

    #[test]
    fn cache_flag_disables_caching() {
        let args = Args::try_parse_from(["urnik", "BIUN-2", "-c"]).unwrap();
        assert!(!args.use_cache);
    }

    #[test]
    fn date_is_validated() {
        let args = Args::try_parse_from(["urnik", "BIUN-2", "-d", "2025-03-03"]).unwrap();
        assert_eq!(args.date.as_deref(), Some("2025-03-03"));
        assert!(Args::try_parse_from(["urnik", "BIUN-2", "--date", "3.3.2025"]).is_err());
    }

    #[test]
    fn program_is_required() {
        assert!(Args::try_parse_from(["urnik"]).is_err());
    }
}
