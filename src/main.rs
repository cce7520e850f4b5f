use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sift::commands::Printer;
use sift::commands::pager::{page_output, stdout_writer};
use sift::engine::options::ComparisonOptions;
use sift::engine::{diff, diff3};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "sift",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A line diff and three-way merge tool",
    long_about = "Compares text files line by line, or merges two divergent \
    versions of a file against their common ancestor. The comparison engine \
    is usable as a library; this binary is a thin file-reading shell around it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(
        long,
        help = "Ignore leading and trailing whitespace when comparing lines"
    )]
    ignore_whitespace: bool,
    #[arg(long, help = "Ignore case when comparing lines")]
    ignore_case: bool,
    #[arg(long, help = "Ignore lines that are blank after trimming")]
    ignore_blank_lines: bool,
}

impl From<&CompareArgs> for ComparisonOptions {
    fn from(args: &CompareArgs) -> Self {
        ComparisonOptions::new(
            args.ignore_whitespace,
            args.ignore_case,
            args.ignore_blank_lines,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line differences between two files",
        long_about = "This command compares two files line by line and prints the \
        changed regions in unified style. It exits with status 1 when the files \
        differ and 0 when they are identical under the chosen comparison options."
    )]
    Diff {
        #[arg(index = 1, help = "The left-hand file")]
        left: PathBuf,
        #[arg(index = 2, help = "The right-hand file")]
        right: PathBuf,
        #[command(flatten)]
        compare: CompareArgs,
        #[arg(
            long,
            help = "Print a summary of insertions, deletions and modifications"
        )]
        stat: bool,
    },
    #[command(
        name = "merge",
        about = "Three-way merge two files against a common ancestor",
        long_about = "This command classifies every region of the two divergent \
        files against their common ancestor and prints the merged content, with \
        git-style conflict markers where both sides changed the same region. It \
        exits with status 1 when conflicts were emitted and 0 on a clean merge."
    )]
    Merge {
        #[arg(index = 1, help = "The common ancestor file")]
        base: PathBuf,
        #[arg(index = 2, help = "The left-hand (ours) file")]
        left: PathBuf,
        #[arg(index = 3, help = "The right-hand (theirs) file")]
        right: PathBuf,
        #[command(flatten)]
        compare: CompareArgs,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Diff {
            left,
            right,
            compare,
            stat,
        } => {
            let left_lines = read_lines(left)?;
            let right_lines = read_lines(right)?;

            let result = diff(&left_lines, &right_lines, &compare.into());

            let (writer, pager) = stdout_writer();
            let printer = Printer::new(writer);
            printer.print_diff(
                &result,
                &left.display().to_string(),
                &right.display().to_string(),
            )?;
            if *stat {
                printer.print_diff_stat(&result)?;
            }
            drop(printer);
            page_output(pager)?;

            Ok(if result.has_changes() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Merge {
            base,
            left,
            right,
            compare,
        } => {
            let base_lines = read_lines(base)?;
            let left_lines = read_lines(left)?;
            let right_lines = read_lines(right)?;

            let result = diff3(&base_lines, &left_lines, &right_lines, &compare.into());

            let printer = Printer::new(Box::new(std::io::stdout()));
            printer.print_merge(
                &result,
                &left.display().to_string(),
                &right.display().to_string(),
            )?;

            Ok(if result.has_conflicts() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(content.lines().map(|line| line.to_string()).collect())
}
