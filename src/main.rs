//! Parses command line arguments and sets the ball rolling by building
//! and launching the `App`, setting it up so it gracefully returns on
//! ctrl+c.
//!
//! Handles exit codes based on whether the `App` produced an error when
//! run.
//!
//! Calls into the respective modules to set up logging and ensures fatal
//! errors are being logged.
use clap::{self, crate_authors, crate_name, crate_version, Arg, ArgMatches};
use failure::Error;
use led_timing_board::{
    config::{self, Config},
    log::{init_logging, log_fatal},
    App,
};
use log::debug;
use std::io;
use std::process::exit;

fn main() {
    if bootstrap().is_err() {
        exit(1);
    }
}

fn bootstrap() -> Result<(), Error> {
    let matches = clap::App::new(crate_name!())
        .version(crate_version!())
        .about("Shows pit lane information typed on a numeric keypad on an LED matrix.")
        .author(crate_authors!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("YAML configuration file")
                .long_help(
                    "Path to a YAML file overriding the built-in configuration, \
                     e.g. instructions, placeholders or the driver command line.",
                ),
        )
        .arg(
            Arg::with_name("keyboard")
                .short("k")
                .long("keyboard")
                .takes_value(true)
                .value_name("DEVICE")
                .help("Input event device of the keypad")
                .long_help(
                    "Reads key presses from the given Linux input event device \
                     instead of the one in the configuration.",
                )
                .conflicts_with("stdin")
                .conflicts_with("interactive"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read keypad input from stdin")
                .long_help(
                    "Type keypad characters on stdin instead of using the USB keypad. \
                     Newlines submit.",
                )
                .conflicts_with("interactive"),
        )
        .arg(
            Arg::with_name("interactive")
                .short("i")
                .long("interactive")
                .help("Prompt for two lines at a time on the terminal")
                .long_help(
                    "Asks for a command or timing on the first prompt and, after \
                     a command, for a timing on the second prompt. Both lines are \
                     shown on the board together.",
                ),
        )
        .arg(
            Arg::with_name("driver")
                .short("d")
                .long("driver")
                .takes_value(true)
                .value_name("PROGRAM")
                .help("LED matrix driver program")
                .long_help("Overrides the driver program from the configuration.")
                .conflicts_with("stdout"),
        )
        .arg(
            Arg::with_name("stdout")
                .long("stdout")
                .help("Print board lines instead of running the driver")
                .long_help(
                    "Does not start the driver and prints the lines meant for it \
                     to stdout, for trying things out without a matrix.",
                ),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Silence warnings and errors")
                .long_help("Turn off logging completely, including warnings and errors."),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Verbose logging")
                .long_help(
                    "Print non-essential output with diagnostic information to stderr. \
                     Multiple occurrences increase logging verbosity. -vvv is the highest verbosity, \
                     printing debug information."
                )
                .conflicts_with("quiet"),
        )
        .get_matches();

    let verbosity_level = if matches.is_present("quiet") {
        None
    } else {
        Some(matches.occurrences_of("verbose"))
    };
    init_logging(verbosity_level);

    let result = build_app(&matches).and_then(|a| {
        debug!("initialization complete, starting");
        a.run()
    });

    match result {
        Ok(_) => debug!("exiting after normal operation."),
        Err(ref err) => log_fatal(err),
    }

    result
}

fn load_config(matches: &ArgMatches) -> Result<Config, Error> {
    let mut config = match matches.value_of("config") {
        Some(path) => config::from_path(path)?,
        None => Config::default(),
    };

    if let Some(program) = matches.value_of("driver") {
        config.driver.program = program.to_string();
    }

    Ok(config.with_env_overrides())
}

fn build_app(matches: &ArgMatches) -> Result<App, Error> {
    let config = load_config(matches)?;
    let keyboard = matches
        .value_of("keyboard")
        .unwrap_or(config.keyboard.as_str())
        .to_string();

    let mut app = App::builder();
    app.config(config);

    if matches.is_present("interactive") {
        app.interactive();
    } else if matches.is_present("stdin") {
        app.stdin_keypad();
    } else {
        keyboard_input(&mut app, &keyboard)?;
    }

    if matches.is_present("stdout") {
        app.sink(io::stdout());
    } else {
        app.driver()?;
    }

    app.terminate_on_ctrlc_and_sigterm();

    Ok(app.build()?)
}

#[cfg(target_os = "linux")]
fn keyboard_input(app: &mut led_timing_board::AppBuilder, device: &str) -> Result<(), Error> {
    debug!("reading keypad from {}", device);
    app.evdev_keypad(device)?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn keyboard_input(_app: &mut led_timing_board::AppBuilder, device: &str) -> Result<(), Error> {
    failure::bail!(
        "keypad device {} is only supported on Linux, use --stdin or --interactive",
        device
    )
}
