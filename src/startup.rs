use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    routes::{default_route, prospect_route},
    services::ProspectPipeline,
};

pub fn run(listener: TcpListener, pipeline: ProspectPipeline) -> Result<Server, std::io::Error> {
    let pipeline = Data::new(pipeline);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(web::scope("/prospect").service(prospect_route::search_prospects))
            .app_data(pipeline.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
