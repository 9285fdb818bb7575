use inquire::{Password, PasswordDisplayMode, Text};

use crate::error::Result;

/// 交互式输入能力
///
/// 抽象出来以便在测试中用脚本化的回答替代终端交互。
pub trait Prompter {
    /// 读取一个不回显的秘密值（以 `*` 掩码显示）
    ///
    /// `has_default` 为 true 时提示用户直接回车即可保留当前值。
    fn secret(&self, message: &str, has_default: bool) -> Result<String>;

    /// 读取普通文本，`default` 预填为默认值
    fn text(&self, message: &str, default: &str) -> Result<String>;
}

/// 基于 `inquire` 的终端实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn secret(&self, message: &str, has_default: bool) -> Result<String> {
        let mut prompt = Password::new(message)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation();
        if has_default {
            prompt = prompt.with_help_message("press enter to keep the current key");
        }
        Ok(prompt.prompt()?)
    }

    fn text(&self, message: &str, default: &str) -> Result<String> {
        let mut prompt = Text::new(message);
        if !default.is_empty() {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?)
    }
}
