//! XSTest BenchFlow CLI entry point.

fn main() {
    if let Err(e) = xstest_benchflow_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
