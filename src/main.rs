mod handlers;
mod models;
mod services;
mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use services::vision::{OpenAiVisionClient, VisionClient};
use utils::{config::Config, db::establish_connection};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file FIRST before anything else
    dotenv::dotenv().ok();

    // Initialize logger with default level if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=================================================");
    println!("🥗 nutrifit Backend Server");
    println!("=================================================");

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    utils::validators::validate_url(&config.vision_api_base)
        .expect("VISION_API_BASE must be an http(s) URL");
    let host = config.host.clone();
    let port = config.port;

    println!("📝 Configuration loaded:");
    println!("   - Database: {}", config.database_url);
    println!("   - Host: {}", host);
    println!("   - Port: {}", port);
    println!(
        "   - Vision model: {} via {}",
        config.vision_model, config.vision_api_base
    );
    println!(
        "   - Vision API key: {}",
        if config.vision_api_key.is_some() {
            "configured"
        } else {
            "NOT SET (food photo analysis disabled)"
        }
    );
    println!(
        "   - Log level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    );

    // Establish database connection
    print!("🔌 Connecting to database... ");
    let db = establish_connection(&config.database_url)
        .await
        .expect("Failed to connect to database");
    println!("✅ Connected!");

    log::info!("Database connection established");

    let vision: Arc<dyn VisionClient> = Arc::new(OpenAiVisionClient::new(&config));
    let vision_data: web::Data<dyn VisionClient> = web::Data::from(vision);

    // Start HTTP server
    println!("🌐 Starting HTTP server at http://{}:{}", host, port);
    println!("📍 Available endpoints:");
    println!("   - POST http://{}:{}/api/profile", host, port);
    println!("   - GET  http://{}:{}/api/profile", host, port);
    println!("   - GET  http://{}:{}/api/nutrition", host, port);
    println!("   - GET  http://{}:{}/api/meal-plan", host, port);
    println!("   - GET  http://{}:{}/api/workout-plan", host, port);
    println!("   - POST http://{}:{}/api/generate-plan", host, port);
    println!("   - POST http://{}:{}/api/progress", host, port);
    println!("   - GET  http://{}:{}/api/progress", host, port);
    println!("   - POST http://{}:{}/api/analyze-food", host, port);
    println!("   - GET  http://{}:{}/api/food-analyses", host, port);
    println!("=================================================");

    log::info!("Server started at http://{}:{}", host, port);

    HttpServer::new(move || {
        // Strict CORS: only the known frontend origins may call the API
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin(&config.frontend_url)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(vision_data.clone())
            .wrap(Logger::default())
            .wrap(cors) // CORS must be wrapped AFTER Logger to ensure headers are added to all responses
            .service(
                web::scope("/api")
                    .route("/profile", web::post().to(handlers::profile::save_profile))
                    .route("/profile", web::get().to(handlers::profile::get_profile))
                    .route(
                        "/nutrition",
                        web::get().to(handlers::nutrition::calculate_nutrition),
                    )
                    .route("/meal-plan", web::get().to(handlers::plans::get_meal_plan))
                    .route(
                        "/workout-plan",
                        web::get().to(handlers::plans::get_workout_plan),
                    )
                    .route(
                        "/generate-plan",
                        web::post().to(handlers::plans::generate_plan),
                    )
                    .route("/progress", web::post().to(handlers::progress::add_progress))
                    .route("/progress", web::get().to(handlers::progress::list_progress))
                    .route(
                        "/analyze-food",
                        web::post().to(handlers::food_analysis::analyze_food),
                    )
                    .route(
                        "/food-analyses",
                        web::get().to(handlers::food_analysis::list_food_analyses),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
