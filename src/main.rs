use std::net::TcpListener;

use env_logger::Env;
use magnet::{
    configuration::get_configuration,
    services::{CompanyFinder, ContactDirectory, ProspectPipeline},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let company_finder = CompanyFinder::new(configuration.api_keys.company_finder);
    let contact_directory = ContactDirectory::new(configuration.api_keys.contact_directory);
    let pipeline = ProspectPipeline::new(company_finder, contact_directory);

    run(listener, pipeline)?.await
}
