use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod logging;

mod util {
    pub mod text;
}

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.data.verbose);

    let ctx = display::Context::detect().with_quiet(cli.data.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, &cli.data, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
