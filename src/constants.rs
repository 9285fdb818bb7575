//! 全局常量定义

/// 配置文件相关常量
pub mod config {
    /// 用户目录下的配置目录名
    pub const DIR_NAME: &str = ".shipit";

    /// 配置文件名
    pub const FILE_NAME: &str = "config.json";

    /// 环境变量：覆盖 API key（不会写入配置文件）
    pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

    /// 环境变量：覆盖模型
    pub const MODEL_ENV: &str = "OPENROUTER_MODEL";
}

/// LLM 相关常量
pub mod llm {
    /// 未配置模型时使用的默认模型
    pub const DEFAULT_MODEL: &str = "x-ai/grok-4.1-fast:free";

    /// OpenRouter chat completions endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

    /// 模型没有返回内容时使用的 commit message
    pub const FALLBACK_COMMIT_MESSAGE: &str = "Auto-generated commit";
}

/// UI 相关常量
pub mod ui {
    /// 展示 API key 时保留的尾部字符数
    pub const MASK_VISIBLE_CHARS: usize = 4;
}
