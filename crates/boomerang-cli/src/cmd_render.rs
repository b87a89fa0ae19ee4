use anyhow::{Context, Result};
use boomerang::v1::Flight;
use boomerang_dot::{RenderOptions, render};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum RenderFormat {
    /// Render as Graphviz DOT
    Dot {
        /// Input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Label edges with the move applied
        #[arg(long, default_value = "true")]
        show_ops: bool,

        /// Number each step node
        #[arg(long)]
        show_step_numbers: bool,
    },
}

pub fn run(format: RenderFormat) -> Result<()> {
    match format {
        RenderFormat::Dot {
            input,
            output,
            show_ops,
            show_step_numbers,
        } => run_dot(input, output, show_ops, show_step_numbers),
    }
}

fn run_dot(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    show_ops: bool,
    show_step_numbers: bool,
) -> Result<()> {
    let content = if let Some(path) = &input {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    } else {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    };

    let flight = Flight::from_json(&content).context("Failed to parse flight document")?;
    let options = RenderOptions {
        show_ops,
        show_step_numbers,
    };
    let dot = render(&flight, &options);

    if let Some(path) = &output {
        std::fs::write(path, &dot).with_context(|| format!("Failed to write {:?}", path))?;
    } else {
        print!("{}", dot);
    }
    Ok(())
}
