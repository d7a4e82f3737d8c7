//! Interactive console client for the Mastermind server.

mod api;

use api::ApiClient;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mastermind-client")]
#[command(about = "Play multiplayer Mastermind from the terminal")]
struct Args {
    /// Base URL of the game server
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,
}

const MENU: &str = "\
1. Join game
2. Mark as ready
3. Make a guess
4. Game status
5. Game result
6. Turn order
0. Exit";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = ApiClient::new(&args.server);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut player_id: Option<String> = None;

    loop {
        println!("\n{MENU}");
        let Some(choice) = prompt(&mut input, "Choose an option: ").await? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if player_id.is_some() {
                    println!("You have already joined.");
                    continue;
                }
                let Some(name) = prompt(&mut input, "Enter your name: ").await? else {
                    break;
                };
                match client.join(&name).await {
                    Ok(joined) => {
                        println!("Joined as {} (id {})", joined.name, joined.player_id);
                        player_id = Some(joined.player_id);
                    }
                    Err(e) => println!("Join failed: {e}"),
                }
            }
            "2" => {
                let Some(id) = player_id.as_deref() else {
                    println!("Join the game first.");
                    continue;
                };
                match client.ready(id).await {
                    Ok(ready) if ready.round_started => println!("{}", ready.status),
                    Ok(ready) => println!("{}; waiting for other players", ready.status),
                    Err(e) => println!("Ready failed: {e}"),
                }
            }
            "3" => {
                let Some(id) = player_id.clone() else {
                    println!("Join the game first.");
                    continue;
                };
                let Some(guess) = prompt(&mut input, "Enter two digits: ").await? else {
                    break;
                };
                match client.guess(&id, &guess).await {
                    Ok(reply) => println!(
                        "black: {}, white: {} ({})",
                        reply.black, reply.white, reply.message
                    ),
                    Err(e) => println!("Guess failed: {e}"),
                }
            }
            "4" => match client.status().await {
                Ok(status) => {
                    println!("round active: {}", status.round_active);
                    println!("players: {} (ready: {})", status.players, status.ready);
                    if !status.current_turn.is_empty() {
                        println!("current turn: {}", status.current_turn);
                    }
                }
                Err(e) => println!("Status failed: {e}"),
            },
            "5" => match client.result().await {
                Ok(result) => println!(
                    "{}",
                    serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string())
                ),
                Err(e) => println!("{e}"),
            },
            "6" => match client.turns().await {
                Ok(names) if names.is_empty() => println!("No round in progress."),
                Ok(names) => {
                    for (i, name) in names.iter().enumerate() {
                        println!("{}. {name}", i + 1);
                    }
                }
                Err(e) => println!("Turn order failed: {e}"),
            },
            "0" => break,
            other => println!("Unknown option '{other}'"),
        }
    }

    println!("Bye!");
    Ok(())
}

/// `None` once stdin is closed.
async fn prompt(
    input: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}
