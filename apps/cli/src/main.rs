mod args;
mod charts;
mod config;

use std::io;
use std::path::Path;

use costboard_app::{DatasetLoader, HttpBackend, UiState, Workbook};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    let config = config::load_or_create().map_err(io::Error::other)?;
    if config.created {
        println!(
            "Created config at {} (default backend {}).",
            config.paths.file.display(),
            config.config.base_url
        );
    }

    let base_url = args.base_url.unwrap_or(config.config.base_url);

    let backend = HttpBackend::new(base_url.clone());
    let mut loader = DatasetLoader::new(backend, charts::TermRenderer::new());
    let mut ui = UiState::new();

    // Same sequence as page load: probe once, fall back to sample data
    // when no backend answers.
    loader.load_sample_if_no_backend(&mut ui);
    if ui.status().is_empty() {
        println!("Backend at {base_url} is reachable.");
    } else {
        println!("{}", ui.status());
    }

    if let Some(path) = args.file.as_deref() {
        let workbook = match Workbook::from_path(Path::new(path)) {
            Ok(workbook) => Some(workbook),
            Err(err) => {
                eprintln!("failed to read {path}: {err}");
                None
            }
        };
        loader.upload(&mut ui, workbook.as_ref());
        println!("{}", ui.status());
    } else if ui.status().is_empty() {
        println!("Pass --file <workbook> to upload a spreadsheet.");
    }

    Ok(())
}
