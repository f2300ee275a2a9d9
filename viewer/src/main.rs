use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use viewer::client::NewsClient;
use viewer::render::render;
use viewer::state::{Display, Source};
use viewer::ticker::LoadingTicker;

#[derive(Parser)]
#[command(name = "viewer", version, about = "Terminal display for the AI news/art pipeline.")]
struct Cli {
    /// Query service endpoint
    #[arg(long, default_value = "http://127.0.0.1:3000/api/v1/news")]
    api_url: String,

    /// External workflow trigger webhook; dynamic mode is disabled without it
    #[arg(long)]
    webhook_url: Option<String>,

    /// Per-request timeout in seconds (the webhook can take tens of seconds)
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Fetch the current entry once, render it, and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let client = NewsClient::new(
        cli.api_url.clone(),
        cli.webhook_url.clone(),
        Duration::from_secs(cli.timeout),
    )?;

    print_banner(&cli);

    let mut display = Display::new();

    // The client always starts by loading the persisted entry.
    run_fetch(&client, &mut display, Source::Static).await;
    render(display.state());

    if cli.once {
        return Ok(());
    }

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nnews> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "show" => render(display.state()),
            "refresh" | "r" => {
                run_fetch(&client, &mut display, Source::Static).await;
                render(display.state());
            }
            "generate" | "g" => {
                if !client.has_webhook() {
                    eprintln!("no webhook URL configured, start with --webhook-url to enable dynamic mode");
                    continue;
                }
                run_fetch(&client, &mut display, Source::Dynamic).await;
                render(display.state());
            }
            other => eprintln!("unknown command: {other} (try refresh, generate, show, quit)"),
        }
    }

    println!("goodbye.");
    Ok(())
}

/// Issue one fetch, cycling loading messages until it resolves. Ctrl+C
/// abandons the request; the ticker is stopped on every path out of here.
async fn run_fetch(client: &NewsClient, display: &mut Display, source: Source) {
    let token = display.begin();
    let ticker = LoadingTicker::start();

    let outcome = tokio::select! {
        result = async {
            match source {
                Source::Static => client.fetch_active().await,
                Source::Dynamic => client.trigger_generation().await,
            }
        } => result.map_err(|e| e.to_string()),
        _ = tokio::signal::ctrl_c() => Err("interrupted".to_string()),
    };

    ticker.stop().await;
    display.complete(token, outcome, source, timestamp());
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn print_banner(cli: &Cli) {
    let dynamic = if cli.webhook_url.is_some() {
        "enabled"
    } else {
        "disabled (no webhook URL)"
    };

    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║          N E W S   A R T              ║
   ║     today's story, painted by AI      ║
   ╚═══════════════════════════════════════╝

   version   {}
   service   {}
   dynamic   {}
"#,
        env!("CARGO_PKG_VERSION"),
        cli.api_url,
        dynamic,
    );
}
