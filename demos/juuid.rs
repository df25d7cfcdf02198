//! Simple command that prints random or name-based UUID strings, or inspects one

use clap::Parser;
use std::{io, io::Write, process::ExitCode};

/// Prints one or `-n count` random UUIDs unless another mode is selected.
#[derive(Parser, Debug)]
#[command(name = "juuid")]
struct Args {
    /// Number of UUIDs to print.
    #[arg(short = 'n', default_value_t = 1, conflicts_with_all = ["names", "inspect"])]
    count: usize,

    /// Prints the name-based (version 3) UUID of each NAME instead.
    #[arg(long = "name", value_name = "NAME", conflicts_with = "inspect")]
    names: Vec<String>,

    /// Prints the fields decoded from UUID instead.
    #[arg(long, value_name = "UUID")]
    inspect: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let mut buf = io::BufWriter::new(io::stdout());
    if let Some(text) = args.inspect {
        let uuid = match text.parse::<juuid::Uuid>() {
            Ok(uuid) => uuid,
            Err(err) => {
                eprintln!("Error: {}: '{}'", err, text);
                return Ok(ExitCode::FAILURE);
            }
        };
        writeln!(buf, "uuid:    {}", uuid)?;
        writeln!(buf, "version: {}", uuid.version())?;
        writeln!(buf, "variant: {}", u8::from(uuid.variant()))?;
        if let (Ok(timestamp), Ok(clock_seq), Ok(node)) =
            (uuid.timestamp(), uuid.clock_sequence(), uuid.node())
        {
            writeln!(buf, "time:    {}", timestamp)?;
            writeln!(buf, "clock:   {}", clock_seq)?;
            writeln!(buf, "node:    {:012x}", node)?;
        }
    } else if !args.names.is_empty() {
        for name in &args.names {
            writeln!(buf, "{}", juuid::name_uuid_from_bytes(name))?;
        }
    } else {
        for _ in 0..args.count {
            writeln!(buf, "{}", juuid::random_uuid())?;
        }
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}
