use clap::{Parser, Subcommand};

/// Base58Check encoder/decoder for hex payloads.
#[derive(Parser)]
#[command(name = "b58")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a hex payload as base58.
    Encode {
        /// Payload bytes, hex encoded.
        hex: String,
        /// Skip the 4-byte checksum.
        #[arg(long)]
        plain: bool,
    },
    /// Decode a base58 string, printing the payload as hex.
    Decode {
        /// The base58 string.
        encoded: String,
        /// Treat the input as checksum-free.
        #[arg(long)]
        plain: bool,
    },
}

fn run(command: Command) -> Result<String, String> {
    match command {
        Command::Encode { hex: payload, plain } => {
            let data = hex::decode(payload.trim())
                .map_err(|e| format!("invalid hex payload: {}", e))?;
            if plain {
                Ok(base58check::encode_plain(&data))
            } else {
                base58check::encode(&data).map_err(|e| e.to_string())
            }
        }
        Command::Decode { encoded, plain } => {
            let data = if plain {
                base58check::decode_plain(&encoded)
            } else {
                base58check::decode(&encoded)
            }
            .map_err(|e| e.to_string())?;
            Ok(hex::encode(data))
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
