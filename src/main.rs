fn main() {
    if let Err(e) = content_sniffer::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
