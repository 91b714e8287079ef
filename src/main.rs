fn main() {
    if let Err(err) = tslabel_lib::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
