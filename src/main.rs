use flipside::Engine;
use std::io;
use tracing_subscriber::EnvFilter;

mod protocol;
use protocol::command::{parse_command, Command};
use protocol::handler::handle_command;

fn report(engine: &Engine, err: anyhow::Error) {
    if engine.options.strict_mode {
        panic!("{:#}", err);
    } else {
        eprintln!("error: {:#}", err);
    }
}

fn main() {
    // logs go to stderr so stdout only carries protocol output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Flipside - Othello minimax engine");

    let mut engine = match Engine::new() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        // read line by line without holding the lock so human players can
        // read from stdin during a match
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }

        let cmd = match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                report(&engine, err);
                continue;
            }
        };

        if let Err(err) = handle_command(&cmd, &mut engine) {
            report(&engine, err);
        }
    }
}
