use std::{fs, process::ExitCode};

use clap::{Parser as ClapParser, ValueEnum};
use log::info;
use serde::Serialize;
use treecalc::{
    Calculation, Parser,
    interpreter::parser::core::DEFAULT_MAX_DEPTH,
    layout::{
        engine::{DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET, LayoutOptions, Spacing},
        node::{LayoutNode, Point},
    },
    util::num::format_number,
};

/// treecalc evaluates arithmetic expressions and lays out their syntax trees
/// for rendering.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Horizontal spacing between the root's children.
    #[arg(long, default_value_t = DEFAULT_X_OFFSET)]
    x_offset: f64,

    /// Vertical distance between tree levels.
    #[arg(long, default_value_t = DEFAULT_Y_OFFSET)]
    y_offset: f64,

    /// Horizontal position of the root.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    origin_x: f64,

    /// Vertical position of the root.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    origin_y: f64,

    /// How children are spread below their parent.
    #[arg(long, value_enum, default_value_t = SpacingArg::Halving)]
    spacing: SpacingArg,

    /// Maximum depth of an expression's syntax tree.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "TREECALC_MAX_DEPTH")]
    max_depth: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SpacingArg {
    Halving,
    LeafCount,
}

impl From<SpacingArg> for Spacing {
    fn from(arg: SpacingArg) -> Self {
        match arg {
            SpacingArg::Halving => Self::Halving,
            SpacingArg::LeafCount => Self::LeafCount,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Human readable report.
    Text,
    /// One JSON object per expression.
    Json,
}

/// The JSON document printed for one expression.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    calculation: &'a Calculation,
    layout:      Option<LayoutNode<'a>>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let expressions = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string)
                            .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    let parser = Parser::with_max_depth(args.max_depth);
    let options = LayoutOptions::new(args.x_offset, args.y_offset)
        .with_origin(Point::new(args.origin_x, args.origin_y))
        .with_spacing(args.spacing.into());
    info!("evaluating {} expression(s) with {parser:?} and {options:?}",
          expressions.len());

    let mut failed = false;
    for expression in &expressions {
        let calculation = Calculation::run(&parser, expression);
        failed |= !calculation.is_ok();

        match args.format {
            Format::Text => print_text(&calculation, &options),
            Format::Json => {
                if let Err(e) = print_json(&calculation, &options) {
                    eprintln!("Failed to encode the report for '{expression}': {e}");
                    failed = true;
                }
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn print_text(calculation: &Calculation, options: &LayoutOptions) {
    println!("expression: {}", calculation.expression);
    match (&calculation.result, &calculation.error) {
        (Some(value), _) => println!("result: {}", format_number(*value)),
        (None, Some(e)) => eprintln!("error: {e}"),
        (None, None) => {},
    }

    if let Some(tree) = &calculation.tree {
        println!("tree: {tree}");
    }

    if let Some(root) = calculation.layout(options) {
        println!("layout:");
        for node in &root {
            println!("  {} @ ({}, {})",
                     node.label(),
                     format_number(node.position.x),
                     format_number(node.position.y));
        }
    }
}

fn print_json(calculation: &Calculation,
              options: &LayoutOptions)
              -> Result<(), serde_json::Error> {
    let report = Report { calculation,
                          layout: calculation.layout(options) };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
