use actix_web::{web, App, HttpServer};
use clap::Parser;

mod api;
mod cli;
mod models;
mod services;
mod state;

use api::{check_process, get_running_list, health};
use cli::CommandArgs;
use state::new_state;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    let state = new_state(&args)?;
    let public_dir = args.public_dir.clone();

    print_banner(&args, &state);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .route("/check-process", web::get().to(check_process))
            .route("/get-running-list", web::get().to(get_running_list))
            .route("/health", web::get().to(health))
            // Static mount goes last so the API routes above win.
            .service(actix_files::Files::new("/", public_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

fn print_banner(args: &CommandArgs, state: &state::AppState) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Status Gateway v0.1.0                                ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    /                      - Dashboard ({})", args.public_dir.display());
    println!("  GET    /check-process?name=.. - Query a unit's active state");
    println!("  GET    /get-running-list      - Known service list ({} entries)", state.running_list.len());
    println!("  GET    /health                - Health check");
    println!("═══════════════════════════════════════════════════════════");
}
