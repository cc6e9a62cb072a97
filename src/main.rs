use std::process::ExitCode;

fn main() -> ExitCode {
    filesum::cli::run()
}
