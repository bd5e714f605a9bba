use clap::Parser;
use plant_tracker::{actions, cli, config, error, host, logging, render};
use plant_tracker_common::{Command, ImageResolver, PlantGroups, Snapshot};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use host::HomeAssistantClient;
use std::collections::HashMap;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { images } => {
            let snapshot = load_snapshot(cli.snapshot.as_deref(), &config).await?;
            let groups = PlantGroups::from_snapshot(&snapshot);

            let resolved = if images {
                let client = connect(&config)?;
                let resolver = ImageResolver::new(client.base_url(), client.image_probe())
                    .with_paths(&config.card.image_path, &config.card.default_image);

                let mut resolved = HashMap::new();
                for record in snapshot.records() {
                    resolved.insert(record.id.clone(), resolver.resolve(record).await);
                }
                Some(resolved)
            } else {
                None
            };

            println!("🌱 {}\n", config.card.title);
            print!("{}", render::render_groups(&groups, resolved.as_ref()));
        }

        Commands::Add { name, fields, inside } => {
            let snapshot = load_snapshot(cli.snapshot.as_deref(), &config).await?;
            let commands = actions::add_plant(snapshot, &name, &fields, inside)?;
            send(&commands, cli.dry_run, &config).await?;
            println!("✔ {} を追加しました", name);
        }

        Commands::Edit { plant, water, fertilize, postpone, fields, inside } => {
            let snapshot = load_snapshot(cli.snapshot.as_deref(), &config).await?;
            let request = actions::EditRequest { water, fertilize, postpone, fields, inside };
            let today = chrono::Local::now().date_naive();
            let commands = actions::edit_plant(snapshot, &plant, &request, today)?;
            send(&commands, cli.dry_run, &config).await?;
            println!("✔ {} を更新しました", plant);
        }

        Commands::Delete { plant, yes } => {
            let snapshot = load_snapshot(cli.snapshot.as_deref(), &config).await?;
            let commands = actions::delete_plant(snapshot, &plant, |prompt| {
                if yes {
                    return Ok(true);
                }
                // 端末がなければ Prompt エラーで中断
                Ok(dialoguer::Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()?)
            })?;

            if commands.is_empty() {
                println!("削除を取り消しました");
            } else {
                send(&commands, cli.dry_run, &config).await?;
                println!("✔ {} を削除しました", plant);
            }
        }

        Commands::Refresh => {
            send(&[Command::RefreshDaysSinceWatered], cli.dry_run, &config).await?;
            println!("✔ 再計算を要求しました");
        }

        Commands::Config { set_url, set_token, show } => {
            let mut config = config;
            let changed = set_url.is_some() || set_token.is_some();

            if let Some(url) = set_url {
                config.base_url = Some(url.trim_end_matches('/').to_string());
            }
            if let Some(token) = set_token {
                config.token = Some(token);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  URL: {}", config.base_url.as_deref().unwrap_or("未設定"));
                println!("  トークン: {}", if config.token.is_some() { "設定済み" } else { "未設定" });
                println!("  タイトル: {}", config.card.title);
                println!("  エンティティ: {}*", config.card.entity_prefix);
                println!("  画像パス: {}", config.card.image_path);
            }
        }
    }

    Ok(())
}

fn connect(config: &Config) -> Result<HomeAssistantClient> {
    HomeAssistantClient::new(
        &config.get_base_url()?,
        &config.get_token()?,
        config.timeout_seconds,
    )
}

/// スナップショットをファイルまたはHome Assistantから読む
async fn load_snapshot(path: Option<&Path>, config: &Config) -> Result<Snapshot> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(Snapshot::from_json(&content, &config.card.entity_prefix)?)
        }
        None => connect(config)?.fetch_snapshot(&config.card.entity_prefix).await,
    }
}

/// コマンドを送信（dry-run ならJSONで表示）
async fn send(commands: &[Command], dry_run: bool, config: &Config) -> Result<()> {
    if dry_run {
        for command in commands {
            let call = serde_json::json!({
                "domain": command.domain(),
                "service": command.service(),
                "service_data": command.service_data(),
            });
            println!("{}", serde_json::to_string_pretty(&call)?);
        }
        return Ok(());
    }

    let client = connect(config)?;
    for command in commands {
        client.call_service(command).await?;
    }
    Ok(())
}
