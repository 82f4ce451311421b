use ocommit::{cli::run, utils::print_error};

fn main() {
    if let Err(err) = run() {
        print_error(
            "ocommit failed",
            &err.to_string(),
            "Run with --verbose for more detail.",
        );
        std::process::exit(1);
    }
}
