use roster_allocator::allocation::normalize_rules;
use roster_allocator::display::{print_board, write_board_to_file};
use roster_allocator::parser::{load_rules, load_signups, order_by_arrival};
use roster_allocator::{allocate_with, logging, web, AllocatorConfig};

fn usage() -> String {
    "usage: roster-allocator <rules.json> <signups.csv|signups.json> [--by-arrival] [--out board.txt]\n       roster-allocator web [port]".to_string()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = AllocatorConfig::from_env()?;

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let password = std::env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| "admin123".to_string()); // Default password, change this!

        println!("Starting web server on port {}...", port);
        println!("Access the API at http://localhost:{}/api/board", port);

        web::start_server(port, password, config).await?;
        return Ok(());
    }

    // CLI mode
    if args.len() < 3 {
        eprintln!("{}", usage());
        std::process::exit(2);
    }
    let by_arrival = args.iter().any(|a| a == "--by-arrival");
    let out_file = args
        .iter()
        .position(|a| a == "--out")
        .and_then(|i| args.get(i + 1));

    let rules = normalize_rules(&load_rules(&args[1])?, config.slot_count);
    let mut signups = load_signups(&args[2])?;
    if by_arrival {
        order_by_arrival(&mut signups);
    }
    println!("Loaded {} slot rules and {} signups", rules.len(), signups.len());

    let allocation = allocate_with(&rules, &signups, &config)?;
    print_board("Roster", &rules, &allocation);

    if let Some(path) = out_file {
        write_board_to_file("Roster", &rules, &allocation, path)?;
        println!("Board saved to {}", path);
    }

    Ok(())
}
