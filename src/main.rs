use campus_menu::core::segmenter::FooterPolicy;
use campus_menu::core::views::{ApiResponse, MealView};
use campus_menu::domain::model::{Category, Hall, MealPeriod};
use campus_menu::domain::ports::ConfigProvider;
use campus_menu::utils::error::ErrorSeverity;
use campus_menu::utils::logger::{self, LogFormat};
use campus_menu::utils::validation::Validate;
use campus_menu::{
    CliConfig, Commands, DayMenuBuilder, FoodProFetcher, JsonFileStore, MenuError, MenuService, TomlConfig,
};
use chrono::Local;
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("🚀 Starting campus-menu");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(toml) => run(&toml, &cli).await,
                Err(e) => Err(e),
            }
        }
        None => run(&cli, &cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ campus-menu failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C, cli: &CliConfig) -> campus_menu::Result<()> {
    config.validate()?;

    let footer = if config.footer_ends_dinner() {
        FooterPolicy::EndsDinner
    } else {
        FooterPolicy::Ignore
    };
    let fetcher = FoodProFetcher::from_config(config)?;
    let builder = DayMenuBuilder::new(fetcher, config.fetch_timeout()).with_footer_policy(footer);
    let store = JsonFileStore::new(config.store_path());

    let now = Local::now().naive_local();
    let service = MenuService::new(builder, store, now.date());

    match cli.command {
        Commands::History { month, day, year } => {
            let response = service.api(month, day, year).await;
            println!("{}", response.to_json()?);
            if let ApiResponse::Failed { status, .. } = response {
                tracing::warn!("History lookup answered with status {}", status);
            }
            return Ok(());
        }
        Commands::About => {
            service.refresh_if_stale(now).await?;
            return print_json_or(cli.json, &service.about(), |about| {
                println!("Today is {}", about.day);
                println!("Coming up: {}", about.next_week.join(" "));
            });
        }
        Commands::Watch => {
            tracing::info!(
                "🔁 Watching for day changes every {}s",
                config.refresh_period().as_secs()
            );
            service.run_refresher(config.refresh_period()).await;
            return Ok(());
        }
        _ => {}
    }

    service.refresh_if_stale(now).await?;

    match cli.command {
        Commands::Week => {
            let window = service.snapshot();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(window.as_ref())?);
            } else {
                for day in window.days() {
                    println!(
                        "{}  lunch: {:>3} items  dinner: {:>3} items",
                        day.date,
                        day.lunch.item_count(),
                        day.dinner.item_count()
                    );
                }
            }
        }
        Commands::Lunch { day } => show_meal(cli.json, service.lunch(day))?,
        Commands::Dinner { day } => show_meal(cli.json, service.dinner(day))?,
        Commands::Now => show_meal(cli.json, service.index(now))?,
        Commands::Refresh => {
            println!("✅ Menus refreshed for {}", now.date());
            println!("📁 History stored in: {}", config.store_path());
        }
        Commands::History { .. } | Commands::About | Commands::Watch => {}
    }

    Ok(())
}

fn show_meal(json: bool, view: campus_menu::Result<MealView>) -> campus_menu::Result<()> {
    match view {
        Ok(view) => print_json_or(json, &view, print_meal),
        Err(e @ MenuError::DayOutOfRange { .. }) => {
            println!("{}", e.user_friendly_message());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_json_or<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> campus_menu::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_meal(view: &MealView) {
    let meal = match view.meal {
        MealPeriod::Lunch => "Lunch",
        MealPeriod::Dinner => "Dinner",
    };
    println!("{} {} (next: {})", view.day, meal, view.next_week.join(" "));

    for (hall, items) in view.halls.iter() {
        println!();
        println!("== {} ==", Hall::display_name(hall));
        if items.is_empty() {
            println!("  (no menu)");
        }
        for item in items {
            match item.category() {
                Category::Label => println!("  {}", item.text()),
                Category::None => println!("    {}", item.text()),
                Category::Vegan => println!("    {} [vegan]", item.text()),
                Category::Vegetarian => println!("    {} [vegetarian]", item.text()),
                Category::Pork => println!("    {} [pork]", item.text()),
            }
        }
    }
}
