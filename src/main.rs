use std::{
    collections::HashMap,
    io::{self, BufRead, IsTerminal, Write},
};

use calculator::{
    ast::expressions::Expr, lexer::lexer::tokenize, parser::parser::parse, ConsolePresenter,
    DivisionPolicy, Engine, EngineConfig, MapResolver, Presenter, Resolution, VariableResolver,
};
use clap::{ArgAction, Parser};
use log::{warn, LevelFilter};

/// Evaluates arithmetic expressions built from single digits, single
/// uppercase variables, `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Without it, expressions are read line by
    /// line from standard input.
    expression: Option<String>,

    /// Gives a variable a value, e.g. `--var A=3`. Variables without a
    /// value are asked for when they are reached.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    vars: Vec<(char, f64)>,

    /// Let division by zero produce infinity or NaN instead of an error.
    #[arg(long)]
    non_finite: bool,

    /// Print the parsed tree, fully parenthesised, before the result.
    #[arg(long)]
    tree: bool,

    /// Increase log output, repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_assignment(input: &str) -> Result<(char, f64), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", input))?;

    let mut chars = name.trim().chars();
    let name = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => c,
        _ => return Err(format!("variable names are a single uppercase letter, got `{}`", name)),
    };

    match Resolution::from_input(Some(value)) {
        Resolution::Value(value) => Ok((name, value)),
        _ => Err(format!("`{}` is not a number", value.trim())),
    }
}

/// Asks on the terminal for variables that were not given up front.
/// Answers are kept until `forget` so one expression asks once per name.
///
/// When standard input carries the expressions themselves and is not a
/// terminal, nobody can answer, so unknown variables are `Absent`.
struct PromptResolver {
    preset: MapResolver,
    answers: HashMap<char, Resolution>,
    ask: bool,
}

impl PromptResolver {
    fn new(preset: MapResolver, ask: bool) -> Self {
        PromptResolver { preset, answers: HashMap::new(), ask }
    }

    fn forget(&mut self) {
        self.answers.clear();
    }
}

impl VariableResolver for PromptResolver {
    fn resolve(&mut self, name: char) -> Resolution {
        if let Some(value) = self.preset.get(name) {
            return Resolution::Value(value);
        }
        if let Some(answer) = self.answers.get(&name) {
            return answer.clone();
        }
        if !self.ask {
            warn!("no value given for variable {} and standard input is not a terminal", name);
            return Resolution::Absent;
        }

        eprint!("Enter the value of variable \"{}\": ", name);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        let resolution = match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => Resolution::from_input(None),
            Ok(_) => Resolution::from_input(Some(&answer)),
        };

        self.answers.insert(name, resolution.clone());
        resolution
    }
}

fn print_tree(expression: &str, resolver: &mut dyn VariableResolver) {
    let tree: Option<Expr> = tokenize(expression)
        .ok()
        .and_then(|tokens| parse(tokens, resolver).ok());

    if let Some(tree) = tree {
        println!("Tree: {}", tree);
    }
}

fn run<P: Presenter>(
    engine: &mut Engine<P>,
    resolver: &mut PromptResolver,
    expression: &str,
    tree: bool,
) -> bool {
    if expression.trim().is_empty() {
        eprintln!("Please enter a valid expression!");
        return false;
    }

    resolver.forget();
    if tree {
        print_tree(expression, resolver);
    }

    engine.calculate(expression, resolver).is_ok()
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let config = EngineConfig {
        division: if args.non_finite { DivisionPolicy::NonFinite } else { DivisionPolicy::Reject },
    };
    let mut engine = Engine::new(ConsolePresenter::stdio(), config);
    // In line mode standard input holds the expressions, so only a
    // terminal can also answer variable prompts
    let ask = args.expression.is_some() || io::stdin().is_terminal();
    let mut resolver = PromptResolver::new(args.vars.into_iter().collect(), ask);

    if let Some(expression) = args.expression {
        if !run(&mut engine, &mut resolver, &expression, args.tree) {
            std::process::exit(1);
        }
        return;
    }

    let mut line = String::new();
    loop {
        line.clear();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                run(&mut engine, &mut resolver, &line, args.tree);
            }
            Err(error) => {
                eprintln!("Failed to read standard input: {}", error);
                std::process::exit(1);
            }
        }
    }
}
