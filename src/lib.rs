//! # shipit
//!
//! Stage every change, ask a hosted LLM (OpenRouter) to write the commit
//! message from the diff, commit, and push, in one command.
//!
//! ## 快速开始
//! ```bash
//! # 保存 API key 和模型
//! shipit config set
//!
//! # 暂存、生成 message、commit、push
//! shipit
//! ```
//!
//! ## 核心模块
//! - [`commands`] - `ship` 流程与 `config` 子命令
//! - [`config`] - `~/.shipit/config.json` 读写
//! - [`git`] - git 子进程调用
//! - [`llm`] - OpenRouter chat completions 客户端
//! - [`error`] - 统一错误类型
//! - [`ui`] - 终端输出与交互
//!
//! ## 配置
//! 配置文件位置：`~/.shipit/config.json`
//!
//! ```json
//! {
//!   "apiKey": "sk-or-v1-...",
//!   "model": "x-ai/grok-4.1-fast:free"
//! }
//! ```
//!
//! 环境变量 `OPENROUTER_API_KEY` / `OPENROUTER_MODEL` 优先于配置文件，且不会被写入。

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;
