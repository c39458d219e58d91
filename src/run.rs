use {
    crate::{
        domain::{
            conjure,
            eligibility::{self, Connection},
            eth,
            lore,
            route::{Destination, Route},
        },
        infra::{
            cli,
            config,
            ledger::{self, Ledger},
            terminal,
            wallet,
        },
        util::fmt::Short,
    },
    anyhow::Context,
    clap::Parser,
    std::{path::Path, sync::Arc},
    tracing_subscriber::EnvFilter,
};

/// Entry point of the binary: parses arguments, sets up logging and runs the
/// requested command. Exits the process with a non-zero status on failure.
pub async fn start(args: impl IntoIterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("running menaces with {args:#?}");

    if let Err(err) = run(args).await {
        tracing::error!(?err, "exiting");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

pub async fn run(args: cli::Args) -> anyhow::Result<()> {
    match args.command {
        cli::Command::Menu { config } => menu(config.as_deref()).await,
        cli::Command::Go { path, config } => {
            let route = Route::from_path(&path)
                .with_context(|| format!("no page at {path:?}"))?;
            navigate(Destination::Page(route), config.as_deref()).await
        }
        cli::Command::About => {
            about();
            Ok(())
        }
        cli::Command::CheckEligibility(check) => {
            check_eligibility(&check.config, check.address, check.watch).await
        }
        cli::Command::Conjure(args) => conjure(&args).await,
    }
}

async fn menu(config: Option<&Path>) -> anyhow::Result<()> {
    let destination = tokio::task::spawn_blocking(terminal::menu)
        .await
        .context("menu task failed")??;
    let Some(destination) = destination else {
        return Ok(());
    };
    navigate(destination, config).await
}

async fn navigate(destination: Destination, config: Option<&Path>) -> anyhow::Result<()> {
    tracing::debug!(%destination, "navigating");
    match destination {
        Destination::Page(Route::Home) => {
            let welcome = &lore::WELCOME;
            println!("{}\n\n{}", welcome.header, welcome.caption);
            Ok(())
        }
        Destination::Page(Route::About) => {
            about();
            Ok(())
        }
        Destination::Page(Route::CheckEligibility) => match config {
            Some(config) => check_eligibility(config, None, false).await,
            None => {
                println!("run `menaces check-eligibility --config <path>` to check a wallet");
                Ok(())
            }
        },
        Destination::Page(Route::Conjure) => {
            println!("run `menaces conjure --prompt <text> --strokes <file>` to conjure");
            Ok(())
        }
        Destination::External(url) => {
            println!("{url}");
            Ok(())
        }
    }
}

fn about() {
    for section in lore::sections() {
        println!("{}\n\n{}\n", section.header, section.caption);
        if let Some(image) = section.image {
            println!("[{image}]\n");
        }
    }
}

async fn check_eligibility(
    path: &Path,
    address: Option<eth::Address>,
    watch: bool,
) -> anyhow::Result<()> {
    let config = config::load(path).await?;
    let mut session = session(config, address).await;
    session.connect().await;
    report(session.controller());
    if !watch {
        session.settle().await;
        report(session.controller());
        return Ok(());
    }

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        let progressed = tokio::select! {
            _ = &mut shutdown => break,
            progressed = session.next() => progressed,
        };
        if !progressed {
            break;
        }
        report(session.controller());
    }
    Ok(())
}

/// Builds the eligibility session for `config`. Problems with the ledger
/// node are logged here; the balance read reports them to the user as a
/// failed check.
pub(crate) async fn session(
    config: config::Config,
    address: Option<eth::Address>,
) -> eligibility::Session {
    let ledger = ledger::Erc1155Ledger::new(config.ledger.clone());
    match ledger.chain_id().await {
        Ok(chain) if chain != config.chain_id.value() => tracing::warn!(
            chain,
            expected = config.chain_id.value(),
            "ledger node serves a different chain"
        ),
        Ok(_) => {}
        Err(err) => tracing::warn!(?err, "failed to query the ledger node's chain"),
    }
    let ledger: Arc<dyn Ledger> = Arc::new(ledger);

    let wallet: Option<Arc<dyn wallet::Provider>> = match (address, config.wallet) {
        (Some(address), _) => Some(Arc::new(wallet::StaticWallet(address))),
        (None, Some(node)) => Some(Arc::new(wallet::NodeWallet::new(node))),
        (None, None) => None,
    };

    eligibility::Session::new(wallet, ledger)
}

fn report(controller: &eligibility::Controller) {
    match controller.connection() {
        Connection::Connected(address) => println!(
            "connected: {} | {:?} | {}",
            Short(&address),
            controller.eligibility(),
            controller.verdict().art()
        ),
        Connection::Disconnected => println!("disconnected | {}", controller.verdict().art()),
    }
    if let Some(err) = controller.error() {
        println!("{err}");
    }
}

async fn conjure(args: &cli::Conjure) -> anyhow::Result<()> {
    let data = tokio::fs::read_to_string(&args.strokes)
        .await
        .with_context(|| format!("I/O error while reading {:?}", args.strokes))?;
    let strokes = serde_json::from_str::<Vec<Vec<(f64, f64)>>>(&data)
        .with_context(|| format!("invalid strokes in {:?}", args.strokes))?;

    let mut form = conjure::Form::new(args.width, args.height);
    form.set_prompt(args.prompt.clone());
    let canvas = form.canvas_mut();
    for stroke in strokes {
        let mut points = stroke.into_iter().map(conjure::Point::from);
        let Some(start) = points.next() else {
            continue;
        };
        canvas.pointer_down(start);
        points.for_each(|point| canvas.pointer_move(point));
        canvas.pointer_up();
    }

    let submission = form
        .submit()?
        .context("nothing to conjure: both a prompt and a drawing are required")?;
    tracing::info!(drawing_len = submission.drawing.len(), "conjured");
    println!("{}", serde_json::to_string_pretty(&submission)?);
    Ok(())
}
