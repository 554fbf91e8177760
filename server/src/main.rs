use std::path::Path;

use rocket::fs::{FileServer, NamedFile, relative};
use rocket::{Build, Rocket, get, routes};
use tracing::info;

#[get("/")]
async fn index() -> Option<NamedFile> {
    NamedFile::open(Path::new(relative!("public")).join("index.html"))
        .await
        .ok()
}

fn build_rocket() -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![index])
        .mount("/static", FileServer::from(relative!("public")))
}

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    tracing_subscriber::fmt::init();
    info!("Starting minegrid static host");
    info!("Serving the entry document at / and assets under /static");

    build_rocket()
}
