use std::io::IsTerminal;

use colored::Colorize;

fn color_allowed(is_terminal: bool) -> bool {
    std::env::var_os("NO_COLOR").is_none() && is_terminal
}

/// 判断 stdout 是否应该输出彩色
///
/// 遵循 `NO_COLOR` 约定，且 stdout 不是终端时关闭颜色。
pub fn colors_enabled() -> bool {
    color_allowed(std::io::stdout().is_terminal())
}

/// 同 [`colors_enabled`]，但检查 stderr（用于 [`error`] 等写 stderr 的输出）
pub fn stderr_colors_enabled() -> bool {
    color_allowed(std::io::stderr().is_terminal())
}

/// 显示成功消息（绿色 ✓）
pub fn success(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "✓".green().bold(), msg.green());
    } else {
        println!("✓ {}", msg);
    }
}

/// 显示错误消息（红色 ✗）
pub fn error(msg: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "✗".red().bold(), msg.red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// 格式化信息消息（蓝色 ℹ）
pub fn info(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "ℹ".blue().bold(), msg.blue())
    } else {
        format!("ℹ {}", msg)
    }
}

/// 显示步骤提示（灰色）
pub fn step(step: &str, msg: &str, colored: bool) {
    if colored {
        println!(
            "{} {}",
            format!("[{}]", step).bright_black().bold(),
            msg.bright_black()
        );
    } else {
        println!("[{}] {}", step, msg);
    }
}
