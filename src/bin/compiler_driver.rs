use compiler_c_munch::driver::{driver_main, exit_code};
use std::process::ExitCode;

fn main() -> ExitCode {
    match driver_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::from(exit_code(&err))
        }
    }
}
