use catalog_service::service;

fn main() {
    if let Err(err) = service::run() {
        eprintln!("An error occurred: {}", err);
    }
}
