use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{info, LevelFilter};
use notation_converter::converter::emitter::Parenthesization;
use notation_converter::converter::{emit, parse, ConversionOptions, Notation, DEFAULT_MAX_DEPTH};

/// Converts an arithmetic expression between infix, prefix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert
    expression: String,

    /// Notation the expression is written in (infix, prefix or postfix)
    #[clap(short, long, default_value = "infix")]
    from: Notation,

    /// Notation to convert the expression into (infix, prefix or postfix)
    #[clap(short, long, default_value = "postfix")]
    to: Notation,

    /// Only emit the parentheses needed to keep the infix output unambiguous
    #[clap(short, long)]
    minimal: bool,

    /// Deepest nesting accepted before the expression is rejected
    #[clap(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed expression tree before the converted expression
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    let level_filter = args
        .verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new().filter_level(level_filter).init();

    let options = ConversionOptions {
        parenthesization: if args.minimal {
            Parenthesization::Minimal
        } else {
            Parenthesization::Full
        },
        max_depth: args.max_depth,
    };

    let tree = parse(&args.expression, args.from, &options).with_context(|| {
        format!(
            "could not parse {} expression {:?}",
            args.from, args.expression
        )
    })?;
    if args.tree {
        print!("{}", tree);
    }

    let converted = emit(&tree, args.to, &options);
    info!("Converted from {} to {}", args.from, args.to);
    println!("{0}", converted);
    Ok(())
}
