use shipit::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::ConfigStore;
use error::ShipitError;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // 初始化 tracing 日志（输出到 stderr，不干扰正常输出）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // reqwest 使用 rustls-no-provider，需要手动安装 crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let colored = ui::colors_enabled();

    let result = ConfigStore::open_default().and_then(|store| match cli.command {
        None | Some(Commands::Ship) => {
            let rt = Runtime::new()?;
            rt.block_on(commands::ship::run(&store, colored)).map(|_| ())
        }
        Some(Commands::Config { action }) => {
            commands::config::run(action, &store, &ui::TerminalPrompter, colored)
        }
    });

    if let Err(e) = result {
        match e {
            // 用户取消不算错误，正常退出
            ShipitError::UserCancelled => std::process::exit(0),
            _ => {
                // 错误输出到 stderr，颜色按 stderr 是否为终端判断
                let err_colored = ui::stderr_colors_enabled();
                ui::error(&e.to_string(), err_colored);
                if let Some(suggestion) = e.suggestion() {
                    eprintln!("{}", ui::info(suggestion, err_colored));
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
