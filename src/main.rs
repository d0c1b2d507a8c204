fn main() {
    if let Err(err) = geopattern_rs::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
