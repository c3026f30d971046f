use actix_web::web;

pub mod countries;
pub mod health;
pub mod recommendations;
pub mod travel;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/countries")
                        .route("", web::get().to(countries::list_countries))
                        .route("/{name}", web::get().to(countries::get_country))
                        .route(
                            "/{name}/destinations",
                            web::get().to(countries::get_destinations),
                        )
                        .route("/{name}/budget", web::get().to(countries::get_budget)),
                )
                .route(
                    "/recommendations",
                    web::post().to(recommendations::recommend),
                )
                .route("/itineraries", web::post().to(recommendations::itinerary))
                .route("/tips", web::post().to(recommendations::tips))
                .service(
                    web::scope("/travel")
                        .route("/weather/{destination}", web::get().to(travel::weather))
                        .route("/activities", web::post().to(travel::activities))
                        .route("/flights", web::post().to(travel::flights))
                        .route("/hotels", web::post().to(travel::hotels))
                        .route("/bookings", web::post().to(travel::create_booking)),
                ),
        );
}
