//! mdview - render a Markdown file to HTML

mod page;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mdview_config::Settings;
use mdview_engine::{RenderOptions, io, render_with};

#[derive(Parser)]
#[command(name = "mdview")]
#[command(version, about = "Render Markdown to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdview README.md                       Print the HTML fragment
    mdview --standalone README.md -o a.html  Write a complete page")]
struct Cli {
    /// Markdown file to render
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Settings file (default: ~/.config/mdview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the dark theme
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Flip the theme stored in the settings file
    #[arg(long, conflicts_with_all = ["dark", "light"])]
    toggle_theme: bool,

    /// Grow or shrink the font by this many pixels
    #[arg(long, value_name = "DELTA", allow_hyphen_values = true)]
    zoom: Option<i32>,

    /// Nesting depth past which content renders literally
    #[arg(long, value_name = "N")]
    max_nesting: Option<usize>,

    /// Store the effective settings back to the settings file
    #[arg(long)]
    save: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// One-line report of a failure and its causes, printed once to stderr.
fn error_message(e: &anyhow::Error) -> String {
    format!("error: {e:#}")
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    log::debug!("Effective settings: {settings:?}");
    if cli.save {
        save_settings(cli, &settings)?;
    }

    log::info!("Rendering {}", cli.input.display());
    let markdown = io::read_markdown(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    let opts = RenderOptions {
        max_nesting: settings.max_nesting,
    };
    let fragment = render_with(&markdown, &opts);
    let html = if cli.standalone {
        page::wrap(&fragment, &page_title(&cli.input), &settings)
    } else {
        fragment
    };

    match &cli.output {
        Some(path) => {
            let path = expand(path);
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => std::io::stdout()
            .write_all(html.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

/// Settings from the config file with command-line overrides applied.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let loaded = match cli.config.as_deref().map(expand) {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            Settings::load_from_path(&path)?
        }
        None => {
            log::info!("Config path: {}", Settings::config_path().display());
            Settings::load()?
        }
    };

    let mut settings = match loaded {
        Some(settings) => settings,
        None => {
            log::info!("No config file found, using defaults");
            Settings::default()
        }
    };

    if cli.dark {
        settings.dark_mode = Some(true);
    } else if cli.light {
        settings.dark_mode = Some(false);
    } else if cli.toggle_theme {
        settings.toggle_dark_mode();
    }
    if let Some(delta) = cli.zoom {
        settings.font_size_step(delta);
    }
    if let Some(max_nesting) = cli.max_nesting {
        settings.max_nesting = max_nesting;
    }
    Ok(settings.clamped())
}

fn save_settings(cli: &Cli, settings: &Settings) -> Result<()> {
    match cli.config.as_deref().map(expand) {
        Some(path) => settings
            .save_to_path(&path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?,
        None => settings.save().context("Failed to save settings")?,
    }
    log::info!("Settings saved");
    Ok(())
}

fn expand(path: &Path) -> PathBuf {
    Settings::expand_path(path).unwrap_or_else(|| path.to_path_buf())
}

fn page_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mdview".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "mdview",
            "notes.md",
            "--standalone",
            "--dark",
            "--max-nesting",
            "20",
            "-o",
            "out.html",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("notes.md"));
        assert!(cli.standalone);
        assert!(cli.dark);
        assert_eq!(cli.max_nesting, Some(20));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["mdview", "a.md", "--dark", "--light"]).is_err());
    }

    #[test]
    fn overrides_apply_to_defaults() {
        let cli = Cli::try_parse_from([
            "mdview",
            "a.md",
            "--config",
            "/nonexistent/mdview/config.toml",
            "--light",
            "--max-nesting",
            "0",
        ])
        .unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.dark_mode, Some(false));
        assert_eq!(settings.max_nesting, 1);
        assert_eq!(settings.font_size, Settings::DEFAULT_FONT_SIZE);
    }

    #[test]
    fn zoom_and_toggle_adjust_stored_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        fs::write(&config, "font_size = 29\ndark_mode = true\n").unwrap();
        let cli = Cli::try_parse_from([
            "mdview",
            "a.md",
            "--config",
            config.to_str().unwrap(),
            "--zoom",
            "5",
            "--toggle-theme",
        ])
        .unwrap();

        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.font_size, 30);
        assert_eq!(settings.dark_mode, Some(false));
    }

    #[test]
    fn negative_zoom_parses() {
        let cli = Cli::try_parse_from(["mdview", "a.md", "--zoom", "-2"]).unwrap();
        assert_eq!(cli.zoom, Some(-2));
    }

    #[test]
    fn save_writes_effective_settings_before_rendering() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("nested").join("config.toml");
        let input = temp_dir.path().join("notes.md");
        fs::write(&input, "# Notes\n").unwrap();
        let output = temp_dir.path().join("notes.html");
        let cli = Cli::try_parse_from([
            "mdview",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--dark",
            "--max-nesting",
            "12",
            "--save",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(&cli).unwrap();

        let stored = Settings::load_from_path(&config).unwrap().unwrap();
        assert_eq!(stored.dark_mode, Some(true));
        assert_eq!(stored.max_nesting, 12);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<h1 id=\"h0\">Notes</h1>\n"
        );
    }

    #[test]
    fn missing_input_is_reported_on_one_line() {
        let cli = Cli::try_parse_from([
            "mdview",
            "/nonexistent/notes.md",
            "--config",
            "/nonexistent/mdview/config.toml",
        ])
        .unwrap();
        let message = error_message(&run(&cli).unwrap_err());
        assert!(message.starts_with("error: Failed to load /nonexistent/notes.md: "));
        assert_eq!(message.matches("error:").count(), 1);
        assert!(!message.contains('\n'));
    }

    #[test]
    fn title_is_file_stem() {
        assert_eq!(page_title(Path::new("docs/README.md")), "README");
    }
}
