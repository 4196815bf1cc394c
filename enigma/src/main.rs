use std::io::Read;

#[derive(clap::Parser)]
#[command(name = "enigma")]
#[command(about = "Encipher and decipher Enigma message packets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Encipher a message and print the packet as JSON
    Encrypt {
        /// Rotors for slots 1-3, e.g. `I II III`
        #[arg(long, num_args = 3, required = true)]
        rotors: Vec<String>,
        /// Start positions as three letters
        #[arg(long, default_value = "AAA")]
        pos: String,
        /// Message; anything that is not a letter is dropped
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Decipher a packet given as an argument or on stdin
    Decrypt { packet: Option<String> },
}

fn main() {
    let cli: Cli = clap::Parser::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), enigma::Error> {
    match command {
        Commands::Encrypt {
            rotors,
            pos,
            message,
        } => {
            let rotors = enigma::parse_rotors(&rotors)?;
            let positions = enigma::parse_positions(&pos)?;
            let packet = enigma::Packet::seal(&message.join(" "), rotors, positions)?;
            eprintln!("Ciphertext: {}", packet.message);
            println!("{}", packet.to_json()?);
        }
        Commands::Decrypt { packet } => {
            let json = match packet {
                Some(json) => json,
                None => {
                    let mut json = String::new();
                    std::io::stdin().read_to_string(&mut json)?;
                    json
                }
            };
            let packet = enigma::Packet::from_json(&json)?;
            println!("{}", packet.open()?);
        }
    }
    Ok(())
}
