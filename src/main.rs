use clap::Parser;
use collarboard::application::dashboard::Dashboard;
use collarboard::application::render::chart::CHART_NOTE;
use collarboard::application::render::premium_view::debug_dump;
use collarboard::cli::commands::{Cli, Commands, FormArgs};
use collarboard::domain::entities::collar_request::CollarRequest;
use collarboard::domain::values::form_field::FormField;
use collarboard::infrastructure::charts::text_canvas::TextCanvas;
use collarboard::Collarboard;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let board = match Collarboard::new() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error initializing collarboard: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(board, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(board: Collarboard, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Expirations { ticker } => {
            let list = board.expirations(&ticker).await?;
            if list.is_empty() {
                println!("No expirations listed for {ticker}");
            }
            for date in list.iter() {
                println!("{date}");
            }
        }
        Commands::Calculate { form, premium, key, json } => {
            let mut dash = open_dashboard(&board, &form).await?;
            dash.calculate().await;
            if let Some(err) = dash.error() {
                return Err(err.to_string().into());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&dash.result())?);
            } else {
                print_result(&dash);
            }

            if premium || key.is_some() {
                dash.set_credential(credential(&board, key)?);
                dash.load_premium().await;
                print_premium(&dash, json)?;
            }
        }
        Commands::Premium { form, key, json } => {
            let mut dash = open_dashboard(&board, &form).await?;
            dash.set_credential(credential(&board, key)?);
            dash.load_premium().await;
            print_premium(&dash, json)?;
        }
        Commands::PremiumDebug { form, key } => {
            let dash = open_dashboard(&board, &form).await?;
            let key = credential(&board, key)?;
            let res = board.premium(dash.form().request(), &key).await?;
            println!("{}", serde_json::to_string_pretty(&debug_dump(&res))?);
        }
    }
    Ok(())
}

/// Session for the given form, with expirations loaded and the expiration
/// override (if any) applied.
async fn open_dashboard(
    board: &Collarboard,
    form: &FormArgs,
) -> Result<Dashboard<TextCanvas>, Box<dyn std::error::Error>> {
    let request = CollarRequest::new(
        form.ticker.clone(),
        form.shares,
        form.entry_price,
        form.put_strike,
        form.call_strike,
        "",
    );
    let mut dash = board.dashboard(TextCanvas::default(), request);
    dash.load_expirations().await;

    match &form.expiration {
        Some(exp) => {
            if let Some(err) = dash.error() {
                log::warn!("continuing without expirations list: {err}");
            } else if !dash.form().expirations().contains(exp) {
                log::warn!("{exp} is not a listed expiration for {}", form.ticker);
            }
            dash.edit(FormField::Expiration, exp).await?;
        }
        None => {
            if let Some(err) = dash.error() {
                return Err(err.to_string().into());
            }
        }
    }
    Ok(dash)
}

fn credential(board: &Collarboard, key: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match key {
        Some(k) => Ok(k),
        None => Ok(board.saved_credential()?.unwrap_or_default()),
    }
}

fn print_result(dash: &Dashboard<TextCanvas>) {
    let req = dash.form().request();
    println!(
        "Equity Collar Calculator  {} x{} exp {}  (as of {})",
        req.ticker,
        req.shares,
        req.expiration,
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    if let Some(view) = dash.result_view() {
        println!("{view}");
    }
    if let Some(chart) = dash.chart().current() {
        println!("{chart}");
        println!("{CHART_NOTE}");
    }
}

fn print_premium(dash: &Dashboard<TextCanvas>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let panel = dash.premium();
    if let Some(err) = panel.error() {
        return Err(format!("premium: {err}").into());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&panel.result())?);
    } else if let Some(view) = panel.view() {
        println!("{view}");
    }
    Ok(())
}
