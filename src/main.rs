mod app;
mod config;
mod errors;
mod upload;
mod utils;

use crate::app::GeneUploader;
use crate::config::{Config, DEFAULT_ENDPOINT, ENDPOINT_ENV};
use crate::errors::AppError;
use crate::upload::{ConsoleView, SelectedFile, Uploader};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the analysis service
    #[arg(long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a file without opening the window
    Submit {
        /// Address the results are sent to
        #[arg(short, long, default_value = "")]
        email: String,

        /// Sequence file to upload (FASTQ)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn run_headless(config: &Config, email: &str, file: Option<PathBuf>) -> Result<(), AppError> {
    let rt = tokio::runtime::Runtime::new()?;
    let uploader = Uploader::new(config.endpoint.clone());
    let file = file.map(SelectedFile::from_path);
    let mut view = ConsoleView;

    let result = rt.block_on(uploader.submit(&mut view, email, file.as_ref()))?;
    info!("Submitted job {}", result.job_id);
    Ok(())
}

fn run_gui(config: Config) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([400.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gene Sequence Uploader",
        options,
        Box::new(move |cc| Box::new(GeneUploader::new(cc, &config))),
    )?;
    Ok(())
}

/// Line to print for a failed run. Upload errors were already shown by the
/// status view.
fn failure_message(err: &AppError) -> Option<String> {
    match err {
        AppError::Upload(_) => None,
        other => Some(format!("Error: {}", other)),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    info!("Starting gene uploader");

    let cli = Cli::parse();
    let config = Config::new(cli.endpoint);

    let result = match cli.command {
        Some(Command::Submit { email, file }) => run_headless(&config, &email, file),
        None => run_gui(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if let Some(message) = failure_message(&e) {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reads_file() -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "@r1\nACGT\n+\n!!!!").unwrap();
        tmp
    }

    #[test]
    fn headless_submit_succeeds() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", mockito::Matcher::Regex("^/api/upload_function".into()))
            .with_status(200)
            .with_body(r#"{"jobId":"J1"}"#)
            .create();
        let tmp = reads_file();
        let config = Config::new(server.url());

        let result = run_headless(&config, "a@b.com", Some(tmp.path().to_path_buf()));

        assert!(result.is_ok());
        mock.assert();
    }

    #[test]
    fn headless_submit_fails_on_server_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", mockito::Matcher::Regex("^/api/upload_function".into()))
            .with_status(500)
            .create();
        let tmp = reads_file();
        let config = Config::new(server.url());

        let result = run_headless(&config, "a@b.com", Some(tmp.path().to_path_buf()));

        assert!(matches!(
            result,
            Err(AppError::Upload(UploadError::Status { code: 500, .. }))
        ));
    }

    #[test]
    fn headless_submit_fails_without_email() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create();
        let tmp = reads_file();
        let config = Config::new(server.url());

        let result = run_headless(&config, "", Some(tmp.path().to_path_buf()));

        assert!(matches!(
            result,
            Err(AppError::Upload(UploadError::MissingEmail))
        ));
        mock.assert();
    }

    #[test]
    fn upload_failures_are_not_printed_twice() {
        let upload = AppError::Upload(UploadError::MissingFile);
        assert_eq!(failure_message(&upload), None);

        let runtime = AppError::Runtime(std::io::Error::new(
            std::io::ErrorKind::Other,
            "no threads",
        ));
        assert_eq!(
            failure_message(&runtime).as_deref(),
            Some("Error: Failed to start the async runtime: no threads")
        );
    }

    #[test]
    fn cli_defaults_to_window() {
        let cli = Cli::try_parse_from(["gene-uploader"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_submit() {
        let cli = Cli::try_parse_from([
            "gene-uploader",
            "--endpoint",
            "http://localhost:7071",
            "submit",
            "--email",
            "a@b.com",
            "--file",
            "reads.fastq",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, "http://localhost:7071");
        match cli.command {
            Some(Command::Submit { email, file }) => {
                assert_eq!(email, "a@b.com");
                assert_eq!(file, Some(PathBuf::from("reads.fastq")));
            }
            None => panic!("expected submit"),
        }
    }

    #[test]
    fn cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
