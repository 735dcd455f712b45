use std::process::ExitCode;

fn main() -> ExitCode {
    gauntlet_cli::main_with(&gauntlet_cli::demo::registry())
}
