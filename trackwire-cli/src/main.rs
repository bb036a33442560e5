use clap::Parser;
use std::error::Error;
use trackwire::DecodedPacket;

#[derive(Parser, Debug)]
#[command(version, about = "Decode a tracker telemetry packet")]
struct Cli {
    /// Full packet as hex text, framed by the c0/c2 markers
    packet: String,

    /// 16-byte XTEA key, used byte-for-byte (not hex-decoded)
    #[arg(short, long)]
    key: String,

    /// Print the decoded record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Cli::parse();
    let packet = DecodedPacket::decode(&args.packet, &args.key)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&packet)?);
    } else {
        println!("IMEI:    {}", packet.imei);
        println!("Payload: {}", packet.payload);
    }

    Ok(())
}
