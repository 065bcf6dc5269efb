//! Command-line interface for the markscribe binary.
//!
//! Reads a template, renders it against the configured providers and writes
//! the result to stdout or to the file named by `--write`. Diagnostics and
//! logs go to stderr.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

use clap::Parser;
use markscribe::{Credentials, Error, LiveScribe, io_error, output_error, render_template};
use tokio::runtime::{Builder, Runtime};
use tracing_subscriber::EnvFilter;

/// Render a README template from GitHub, Goodreads, Literal.club and RSS data.
#[derive(Debug, Parser,)]
#[command(name = "markscribe", version, about)]
struct Cli
{
    /// Template file to render.
    #[arg(value_name = "TEMPLATE")]
    template: PathBuf,

    /// Write the rendered document to PATH instead of stdout.
    #[arg(long = "write", short = 'w', value_name = "PATH")]
    write: Option<PathBuf,>,

    #[command(flatten)]
    credentials: Credentials,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    let _ = tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).try_init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates template, provider and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    execute(&cli,)
}

fn execute(cli: &Cli,) -> Result<(), Error,>
{
    let source = fs::read_to_string(&cli.template,).map_err(|source| io_error(&cli.template, source,),)?;

    let runtime = build_runtime()?;
    let scribe = Arc::new(runtime.block_on(LiveScribe::connect(&cli.credentials,),)?,);

    match cli.write.as_deref() {
        Some(path,) => {
            // The destination exists (empty) before any template function runs.
            let mut file = File::create(path,).map_err(|source| output_error(path, source,),)?;
            let rendered = render_template(&source, scribe, runtime.handle().clone(),)?;
            write_output(&mut file, &rendered,).map_err(|source| output_error(path, source,),)
        }
        None => {
            let rendered = render_template(&source, scribe, runtime.handle().clone(),)?;
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_output(&mut handle, &rendered,)
                .map_err(|source| output_error(Path::new("<stdout>",), source,),)
        }
    }
}

/// Single worker: template functions block on one provider call at a time.
fn build_runtime() -> Result<Runtime, Error,>
{
    Builder::new_multi_thread()
        .worker_threads(1,)
        .enable_all()
        .build()
        .map_err(|source| Error::Runtime {
            source,
        },)
}

fn write_output<W: Write,>(writer: &mut W, rendered: &str,) -> io::Result<(),>
{
    writer.write_all(rendered.as_bytes(),)?;
    writer.flush()
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::Parser;
    use markscribe::Credentials;
    use tempfile::tempdir;

    use super::{Cli, execute, write_output};

    fn cli(template: &Path, write: Option<&Path,>,) -> Cli
    {
        Cli {
            template:    template.to_path_buf(),
            write:       write.map(Path::to_path_buf,),
            credentials: Credentials::default(),
        }
    }

    #[test]
    fn write_flag_is_accepted_on_either_side_of_the_template()
    {
        let before =
            Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--write", "README.md", "README.md.tpl",],)
                .expect("failed to parse CLI",);
        let after =
            Cli::try_parse_from([env!("CARGO_PKG_NAME"), "README.md.tpl", "-w", "README.md",],)
                .expect("failed to parse CLI",);

        for parsed in [before, after,] {
            assert_eq!(parsed.template, Path::new("README.md.tpl"));
            assert_eq!(parsed.write.as_deref(), Some(Path::new("README.md")));
        }
    }

    #[test]
    fn missing_template_argument_is_rejected()
    {
        assert!(Cli::try_parse_from([env!("CARGO_PKG_NAME")],).is_err());
    }

    #[test]
    fn renders_template_into_output_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let template = temp.path().join("README.md.tpl",);
        let output = temp.path().join("README.md",);
        fs::write(&template, "# {{ toLower(\"HELLO\") }}\n{{ recentRepos(3) | length }}\n",)
            .expect("failed to write template",);

        execute(&cli(&template, Some(&output,),),).expect("render failed",);

        let rendered = fs::read_to_string(&output,).expect("failed to read output",);
        assert_eq!(rendered, "# hello\n0\n");
    }

    #[test]
    fn failed_render_leaves_an_empty_output_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let template = temp.path().join("README.md.tpl",);
        let output = temp.path().join("README.md",);
        fs::write(&template, "{{ reverse(42) }}",).expect("failed to write template",);

        let error = execute(&cli(&template, Some(&output,),),).expect_err("expected render error",);

        assert!(matches!(error, markscribe::Error::TemplateRender { .. }));
        assert_eq!(fs::read_to_string(&output,).expect("output should exist",), "");
    }

    #[test]
    fn unreadable_template_is_an_io_error()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let missing = temp.path().join("missing.tpl",);

        let error = execute(&cli(&missing, None,),).expect_err("expected io error",);

        match error {
            markscribe::Error::Io {
                path, ..
            } => assert_eq!(path, missing),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn unwritable_destination_is_an_output_error()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let template = temp.path().join("README.md.tpl",);
        fs::write(&template, "static",).expect("failed to write template",);
        let output = temp.path().join("missing-dir",).join("README.md",);

        let error = execute(&cli(&template, Some(&output,),),).expect_err("expected output error",);
        assert!(matches!(error, markscribe::Error::Output { .. }));
    }

    #[test]
    fn write_output_flushes_rendered_text()
    {
        let mut buffer = Cursor::new(Vec::new(),);
        write_output(&mut buffer, "rendered",).expect("write failed",);
        assert_eq!(buffer.into_inner(), b"rendered");
    }
}
