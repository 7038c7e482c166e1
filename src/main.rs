use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use flint::{
    ast::printer,
    errors::reporter::{self, ColorPolicy},
    lexer::lexer::tokenize,
    parser::parser::parse,
    SourceUnit,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path = None;
    let mut dump_ast = false;
    let mut color = ColorPolicy::Auto;

    for arg in &args[1..] {
        if arg == "--ast" {
            dump_ast = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            color = match value {
                "always" => ColorPolicy::Always,
                "never" => ColorPolicy::Never,
                _ => ColorPolicy::Auto,
            };
        } else {
            file_path = Some(arg.clone());
        }
    }

    let Some(file_path) = file_path else {
        eprintln!("usage: flint <file.fl> [--ast] [--color=auto|always|never]");
        exit(2);
    };

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let unit = SourceUnit::new(file_path, source);

    let start = Instant::now();
    let tokens = match tokenize(&unit) {
        Ok(tokens) => tokens,
        Err(error) => {
            reporter::report(&error, &unit, color);
            exit(1);
        }
    };
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let root = match parse(tokens, Rc::clone(&unit)) {
        Ok(root) => root,
        Err(error) => {
            reporter::report(&error, &unit, color);
            exit(1);
        }
    };
    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    if dump_ast {
        eprint!("{}", printer::dump_to_string(&root));
    }
}
