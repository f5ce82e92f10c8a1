use std::process::ExitCode;

use clap::Parser as _;
use mathlang::{DEFAULT_MAX_DEPTH, Parser, SyntaxTree, interpreter::lexer::Lexer,
               util::range::AxisRange};

/// mathlang evaluates a two-variable expression such as `sin(2*x) * cos(y)`.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate.
    expression: String,

    /// Value of `x`.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Value of `y`.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Print the tokens of the expression.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed syntax tree.
    #[arg(long)]
    tree: bool,

    /// Sample both axes over MIN:MAX:STEP and print an `x y z` table.
    ///
    /// Each axis holds at most 10000 samples.
    #[arg(long, value_name = "MIN:MAX:STEP", allow_hyphen_values = true)]
    grid: Option<AxisRange>,

    /// Maximum nesting depth accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn print_grid(tree: &SyntaxTree, range: AxisRange) {
    println!("x\ty\tz");
    for x in range.samples() {
        for y in range.samples() {
            println!("{x}\t{y}\t{}", tree.eval(x, y));
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.tokens {
        for token in Lexer::new(&args.expression) {
            println!("{token}");
        }
    }

    let tree = match Parser::with_max_depth(&args.expression, args.max_depth).parse() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.tree {
        print!("{}", tree.dump());
    }

    match args.grid {
        Some(range) => print_grid(&tree, range),
        None => println!("{}", tree.eval(args.x, args.y)),
    }

    ExitCode::SUCCESS
}
